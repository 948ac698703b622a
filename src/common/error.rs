// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Nada aqui é fatal: todo erro vira uma mensagem na tela e o usuário
// pode simplesmente tentar de novo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("CPF não informado")]
    CpfVazio,

    // Carrega o `detail` que o backend mandou, sem reformular.
    #[error("Login recusado: {0}")]
    LoginRecusado(String),

    // Falha de transporte: rede fora, timeout, resposta que não é JSON...
    #[error("Erro de conexão com o servidor: {0}")]
    ErroDeConexao(#[from] reqwest::Error),

    #[error("Cadastro de {recurso} recusado: {detalhe}")]
    CadastroRecusado {
        recurso: &'static str,
        detalhe: String,
    },

    #[error("Erro de validação")]
    ValidacaoFalhou(#[from] validator::ValidationErrors),
}

impl AppError {
    // Helper para criar erro de validação de um campo só.
    // Os nomes de campo são sempre literais, então dá para exigir 'static
    // e não alocar nada.
    pub fn validacao(campo: &'static str, mensagem: &str) -> Self {
        let mut erros = validator::ValidationErrors::new();
        let mut erro = validator::ValidationError::new("invalido");
        erro.message = Some(mensagem.to_string().into());
        erros.add(campo, erro);

        AppError::ValidacaoFalhou(erros)
    }

    // A mensagem que aparece para o usuário, com o mesmo texto que a loja
    // sempre usou. Só monta a mensagem; quem trata o erro é que loga.
    pub fn mensagem_usuario(&self) -> String {
        match self {
            AppError::CpfVazio => "Digite seu CPF".to_string(),

            AppError::LoginRecusado(detalhe) => detalhe.clone(),

            AppError::ErroDeConexao(_) => "Erro de conexão".to_string(),

            AppError::CadastroRecusado { detalhe, .. } => detalhe.clone(),

            AppError::ValidacaoFalhou(erros) => {
                let mut detalhes = Vec::new();
                for (campo, erros_campo) in erros.field_errors() {
                    for erro in erros_campo {
                        if let Some(mensagem) = &erro.message {
                            detalhes.push(format!("{}: {}", campo, mensagem));
                        }
                    }
                }
                if detalhes.is_empty() {
                    "Um ou mais campos são inválidos.".to_string()
                } else {
                    detalhes.join("; ")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_vazio_tem_a_mensagem_da_tela_de_login() {
        assert_eq!(AppError::CpfVazio.mensagem_usuario(), "Digite seu CPF");
    }

    #[test]
    fn login_recusado_usa_o_detail_do_backend_sem_mexer() {
        let erro = AppError::LoginRecusado("CPF não encontrado".to_string());
        assert_eq!(erro.mensagem_usuario(), "CPF não encontrado");
    }

    #[test]
    fn erro_de_validacao_lista_campo_e_mensagem() {
        let erro = AppError::validacao("valor_servico", "Valor numérico inválido");
        assert_eq!(
            erro.mensagem_usuario(),
            "valor_servico: Valor numérico inválido"
        );
    }

    // Digitação errada repetida cria um erro novo por tentativa; o campo é
    // sempre o mesmo literal e só a mensagem varia.
    #[test]
    fn erros_repetidos_no_mesmo_campo_mantem_a_mensagem_de_cada_tentativa() {
        for tentativa in 1..=3 {
            let mensagem = format!("Valor inválido na tentativa {}", tentativa);
            let erro = AppError::validacao("valor_servico", &mensagem);
            assert_eq!(
                erro.mensagem_usuario(),
                format!("valor_servico: {}", mensagem)
            );
        }
    }
}
