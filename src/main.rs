//src/main.rs

use std::io::{self, BufRead, Write};

mod api;
mod common;
mod config;
mod models;
mod services;
mod session;
mod view;

#[cfg(test)]
mod tests;

use crate::common::error::AppError;
use crate::common::formato::apenas_digitos;
use crate::config::AppState;
use crate::services::form_service::{FormCliente, FormPromocao, FormServico};
use crate::session::{Papel, Sessao};
use crate::view::Tela;

// Qualquer fonte de linhas serve: o stdin de verdade no main, um roteiro
// de entradas nos testes.
trait Linhas: Iterator<Item = io::Result<String>> {}
impl<T: Iterator<Item = io::Result<String>>> Linhas for T {}

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de qualquer coisa.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, o portal não deve abrir.
    let estado = AppState::new().expect("Falha ao inicializar o estado da aplicação.");
    tracing::info!("🚀 Portal Snap Cell Store iniciado");

    let mut sessao = Sessao::nova();
    let stdin = io::stdin();
    let mut linhas = stdin.lock().lines();

    loop {
        print!("{}", view::render(&sessao));

        match view::tela_para(&sessao) {
            Tela::Login => {
                let Some(cpf) = ler(&mut linhas, "CPF (ou 'sair' para encerrar): ") else {
                    break;
                };
                if cpf.trim() == "sair" {
                    break;
                }
                fazer_login(&estado, &mut sessao, &cpf).await;
            }

            Tela::PainelAdmin => {
                let Some(comando) = ler(&mut linhas, "admin> ") else {
                    break;
                };
                match comando.trim() {
                    "novo-cliente" => {
                        if let Err(erro) = novo_cliente(&estado, &mut sessao, &mut linhas).await {
                            println!("❌ {}", erro.mensagem_usuario());
                        }
                    }
                    "novo-servico" => {
                        if let Err(erro) = novo_servico(&estado, &mut sessao, &mut linhas).await {
                            println!("❌ {}", erro.mensagem_usuario());
                        }
                    }
                    "nova-promocao" => {
                        if let Err(erro) = nova_promocao(&estado, &mut sessao, &mut linhas).await {
                            println!("❌ {}", erro.mensagem_usuario());
                        }
                    }
                    "atualizar" => recarregar(&estado, &mut sessao).await,
                    "sair" => sessao.logout(),
                    "" => {}
                    outro => println!(
                        "Comando desconhecido: {} (novo-cliente, novo-servico, nova-promocao, atualizar, sair)",
                        outro
                    ),
                }
            }

            Tela::PainelCliente => {
                let Some(comando) = ler(&mut linhas, "> ") else {
                    break;
                };
                match comando.trim() {
                    "atualizar" => recarregar(&estado, &mut sessao).await,
                    "sair" => sessao.logout(),
                    "" => {}
                    outro => println!("Comando desconhecido: {} (atualizar, sair)", outro),
                }
            }
        }
    }

    tracing::info!("👋 Portal encerrado");
}

// Lê uma linha do terminal; None quando o stdin acabou.
fn ler(linhas: &mut impl Linhas, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    linhas.next()?.ok()
}

fn confirmar(linhas: &mut impl Linhas, prompt: &str) -> bool {
    ler(linhas, prompt)
        .map(|resposta| resposta.trim().eq_ignore_ascii_case("s"))
        .unwrap_or(false)
}

async fn fazer_login(estado: &AppState, sessao: &mut Sessao, cpf: &str) {
    sessao.carregando = true;
    match estado.auth_service.resolver(cpf).await {
        Ok(identidade) => {
            // Entrar já zera a sessão inteira, então nada da sessão anterior
            // (nem de um papel diferente) sobrevive ao login.
            sessao.entrar(identidade);
            recarregar(estado, sessao).await;
        }
        Err(erro) => {
            tracing::error!("Falha no login: {}", erro);
            sessao.erro = Some(erro.mensagem_usuario());
            sessao.carregando = false;
        }
    }
}

// Recarrega as coleções do papel atual, descartando respostas atrasadas
// de uma sessão que já acabou.
async fn recarregar(estado: &AppState, sessao: &mut Sessao) {
    let epoca = sessao.epoca();
    match sessao.papel {
        Papel::Admin => {
            let carga = estado.carga_service.carregar_admin().await;
            sessao.aplicar_carga_admin(epoca, carga);
        }
        Papel::Cliente => {
            let cpf = sessao
                .usuario
                .as_ref()
                .map(|usuario| apenas_digitos(&usuario.cpf))
                .unwrap_or_default();
            let carga = estado.carga_service.carregar_cliente(&cpf).await;
            sessao.aplicar_carga_cliente(epoca, carga);
        }
        Papel::Visitante => {}
    }
    sessao.carregando = false;
}

async fn novo_cliente(
    estado: &AppState,
    sessao: &mut Sessao,
    linhas: &mut impl Linhas,
) -> Result<(), AppError> {
    println!("\n── Adicionar Cliente ──");
    let Some(nome) = ler(linhas, "Nome: ") else { return Ok(()) };
    let Some(cpf) = ler(linhas, "CPF: ") else { return Ok(()) };
    let Some(telefone) = ler(linhas, "Telefone: ") else { return Ok(()) };
    let Some(email) = ler(linhas, "Email: ") else { return Ok(()) };

    let form = FormCliente::default()
        .com_nome(&nome)
        .com_cpf(&cpf)
        .com_telefone(&telefone)
        .com_email(&email);

    // Na falha o formulário continua preenchido, então dá para reenviar
    // sem digitar tudo de novo.
    loop {
        match estado
            .formulario_service
            .submeter_cliente(sessao, &form)
            .await
        {
            Ok(_) => {
                println!("✅ Cliente cadastrado com sucesso!");
                return Ok(());
            }
            Err(erro) => {
                tracing::error!("Falha no cadastro de cliente: {}", erro);
                println!("❌ {}", erro.mensagem_usuario());
                if !confirmar(linhas, "Tentar de novo com os mesmos dados? (s/n): ") {
                    return Ok(());
                }
            }
        }
    }
}

async fn novo_servico(
    estado: &AppState,
    sessao: &mut Sessao,
    linhas: &mut impl Linhas,
) -> Result<(), AppError> {
    println!("\n── Adicionar Serviço ──");
    let Some(cliente_cpf) = ler(linhas, "CPF do Cliente: ") else { return Ok(()) };
    let Some(aparelho) = ler(linhas, "Nome do Aparelho: ") else { return Ok(()) };
    let Some(imei) = ler(linhas, "IMEI: ") else { return Ok(()) };
    let Some(cor) = ler(linhas, "Cor: ") else { return Ok(()) };
    let Some(tipo) = ler(linhas, "Tipo de Serviço: ") else { return Ok(()) };
    let Some(data) = ler(linhas, "Data do Serviço (AAAA-MM-DD): ") else { return Ok(()) };
    let Some(garantia) = ler(linhas, "Fim da Garantia (AAAA-MM-DD): ") else { return Ok(()) };
    let Some(valor) = ler(linhas, "Valor do Serviço: ") else { return Ok(()) };
    let Some(seguro) = ler(linhas, "Tem Seguro (6 meses)? (s/n): ") else { return Ok(()) };

    let tem_seguro = seguro.trim().eq_ignore_ascii_case("s");
    let mut form = FormServico::default()
        .com_cliente_cpf(&cliente_cpf)
        .com_nome_aparelho(&aparelho)
        .com_imei(&imei)
        .com_cor(&cor)
        .com_tipo_servico(&tipo)
        .com_data_servico(&data)?
        .com_data_fim_garantia(&garantia)?
        .com_valor_servico(&valor)?
        .com_tem_seguro(tem_seguro);

    // O campo de valor do seguro só aparece quando tem seguro.
    if tem_seguro {
        let Some(valor_seguro) = ler(linhas, "Valor do Seguro: ") else { return Ok(()) };
        form = form.com_valor_seguro(&valor_seguro)?;
    }

    loop {
        match estado
            .formulario_service
            .submeter_servico(sessao, &form)
            .await
        {
            Ok(_) => {
                println!("✅ Serviço cadastrado com sucesso!");
                return Ok(());
            }
            Err(erro) => {
                tracing::error!("Falha no cadastro de serviço: {}", erro);
                println!("❌ {}", erro.mensagem_usuario());
                if !confirmar(linhas, "Tentar de novo com os mesmos dados? (s/n): ") {
                    return Ok(());
                }
            }
        }
    }
}

async fn nova_promocao(
    estado: &AppState,
    sessao: &mut Sessao,
    linhas: &mut impl Linhas,
) -> Result<(), AppError> {
    println!("\n── Adicionar Promoção ──");
    let Some(titulo) = ler(linhas, "Título: ") else { return Ok(()) };
    let Some(desconto) = ler(linhas, "Desconto (Ex: 20% ou R$ 50): ") else { return Ok(()) };
    let Some(validade) = ler(linhas, "Data de Validade (AAAA-MM-DD): ") else { return Ok(()) };
    let Some(descricao) = ler(linhas, "Descrição: ") else { return Ok(()) };

    let form = FormPromocao::default()
        .com_titulo(&titulo)
        .com_desconto(&desconto)
        .com_data_validade(&validade)?
        .com_descricao(&descricao);

    loop {
        match estado
            .formulario_service
            .submeter_promocao(sessao, &form)
            .await
        {
            Ok(_) => {
                println!("✅ Promoção cadastrada com sucesso!");
                return Ok(());
            }
            Err(erro) => {
                tracing::error!("Falha no cadastro de promoção: {}", erro);
                println!("❌ {}", erro.mensagem_usuario());
                if !confirmar(linhas, "Tentar de novo com os mesmos dados? (s/n): ") {
                    return Ok(());
                }
            }
        }
    }
}
