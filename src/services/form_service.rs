// src/services/form_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    api::PortalApi,
    common::{error::AppError, formato::apenas_digitos},
    models::{NovaPromocao, NovoCliente, NovoServico},
    services::carga_service::CargaService,
    session::Sessao,
};

// =============================================================================
//  PARSE DE CAMPOS
// =============================================================================

// Campos numéricos e de data são validados na hora da digitação: entrada que
// não parseia é recusada e nunca entra no estado do formulário.
fn data_de(bruto: &str, campo: &'static str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(bruto.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validacao(campo, "A data deve estar no formato AAAA-MM-DD"))
}

fn valor_de(bruto: &str, campo: &'static str) -> Result<Decimal, AppError> {
    // Aceita vírgula decimal, que é como todo mundo digita por aqui.
    bruto
        .trim()
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| AppError::validacao(campo, "Valor numérico inválido"))
}

// =============================================================================
//  FORMULÁRIOS (registros tipados, atualização imutável)
// =============================================================================

// Cada `com_*` consome o formulário e devolve um novo com o campo trocado.
// `Default` é o estado vazio declarado de cada formulário.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormCliente {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
}

impl FormCliente {
    pub fn com_nome(mut self, valor: &str) -> Self {
        self.nome = valor.trim().to_string();
        self
    }

    // A máscara do campo só deixa dígitos passarem.
    pub fn com_cpf(mut self, valor: &str) -> Self {
        self.cpf = apenas_digitos(valor);
        self
    }

    pub fn com_telefone(mut self, valor: &str) -> Self {
        self.telefone = valor.trim().to_string();
        self
    }

    pub fn com_email(mut self, valor: &str) -> Self {
        self.email = valor.trim().to_string();
        self
    }

    pub fn payload(&self) -> Result<NovoCliente, AppError> {
        let payload = NovoCliente {
            nome: self.nome.clone(),
            cpf: self.cpf.clone(),
            telefone: self.telefone.clone(),
            email: self.email.clone(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormServico {
    pub cliente_cpf: String,
    pub nome_aparelho: String,
    pub imei: String,
    pub cor: String,
    pub tipo_servico: String,
    pub data_servico: Option<NaiveDate>,
    pub data_fim_garantia: Option<NaiveDate>,
    pub valor_servico: Decimal,
    pub tem_seguro: bool,
    pub valor_seguro: Decimal,
}

impl FormServico {
    pub fn com_cliente_cpf(mut self, valor: &str) -> Self {
        self.cliente_cpf = apenas_digitos(valor);
        self
    }

    pub fn com_nome_aparelho(mut self, valor: &str) -> Self {
        self.nome_aparelho = valor.trim().to_string();
        self
    }

    pub fn com_imei(mut self, valor: &str) -> Self {
        self.imei = valor.trim().to_string();
        self
    }

    pub fn com_cor(mut self, valor: &str) -> Self {
        self.cor = valor.trim().to_string();
        self
    }

    pub fn com_tipo_servico(mut self, valor: &str) -> Self {
        self.tipo_servico = valor.trim().to_string();
        self
    }

    pub fn com_data_servico(mut self, bruto: &str) -> Result<Self, AppError> {
        self.data_servico = Some(data_de(bruto, "data_servico")?);
        Ok(self)
    }

    pub fn com_data_fim_garantia(mut self, bruto: &str) -> Result<Self, AppError> {
        self.data_fim_garantia = Some(data_de(bruto, "data_fim_garantia")?);
        Ok(self)
    }

    pub fn com_valor_servico(mut self, bruto: &str) -> Result<Self, AppError> {
        self.valor_servico = valor_de(bruto, "valor_servico")?;
        Ok(self)
    }

    pub fn com_tem_seguro(mut self, valor: bool) -> Self {
        self.tem_seguro = valor;
        self
    }

    pub fn com_valor_seguro(mut self, bruto: &str) -> Result<Self, AppError> {
        self.valor_seguro = valor_de(bruto, "valor_seguro")?;
        Ok(self)
    }

    pub fn payload(&self) -> Result<NovoServico, AppError> {
        let data_servico = self
            .data_servico
            .ok_or_else(|| AppError::validacao("data_servico", "A data do serviço é obrigatória"))?;
        let data_fim_garantia = self.data_fim_garantia.ok_or_else(|| {
            AppError::validacao("data_fim_garantia", "A data de fim da garantia é obrigatória")
        })?;

        let payload = NovoServico {
            cliente_cpf: self.cliente_cpf.clone(),
            nome_aparelho: self.nome_aparelho.clone(),
            imei: self.imei.clone(),
            cor: self.cor.clone(),
            tipo_servico: self.tipo_servico.clone(),
            data_servico,
            data_fim_garantia,
            valor_servico: self.valor_servico,
            tem_seguro: self.tem_seguro,
            valor_seguro: self.valor_seguro,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPromocao {
    pub titulo: String,
    pub descricao: String,
    pub desconto: String,
    pub data_validade: Option<NaiveDate>,
    pub ativa: bool,
}

// Promoção nova nasce ativa, igual ao formulário de sempre.
impl Default for FormPromocao {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descricao: String::new(),
            desconto: String::new(),
            data_validade: None,
            ativa: true,
        }
    }
}

impl FormPromocao {
    pub fn com_titulo(mut self, valor: &str) -> Self {
        self.titulo = valor.trim().to_string();
        self
    }

    pub fn com_descricao(mut self, valor: &str) -> Self {
        self.descricao = valor.trim().to_string();
        self
    }

    pub fn com_desconto(mut self, valor: &str) -> Self {
        self.desconto = valor.trim().to_string();
        self
    }

    pub fn com_data_validade(mut self, bruto: &str) -> Result<Self, AppError> {
        self.data_validade = Some(data_de(bruto, "data_validade")?);
        Ok(self)
    }

    pub fn com_ativa(mut self, valor: bool) -> Self {
        self.ativa = valor;
        self
    }

    pub fn payload(&self) -> Result<NovaPromocao, AppError> {
        let data_validade = self.data_validade.ok_or_else(|| {
            AppError::validacao("data_validade", "A data de validade é obrigatória")
        })?;

        let payload = NovaPromocao {
            titulo: self.titulo.clone(),
            descricao: self.descricao.clone(),
            desconto: self.desconto.clone(),
            data_validade,
            ativa: self.ativa,
        };
        payload.validate()?;
        Ok(payload)
    }
}

// =============================================================================
//  SUBMISSÃO
// =============================================================================

// Envia os formulários para os endpoints de criação. No sucesso o formulário
// volta ao estado vazio e o painel admin inteiro é recarregado (as três
// coleções, mesmo que só uma tenha mudado: é barato nesse tamanho).
// Na falha o chamador fica com o formulário intacto para tentar de novo.
#[derive(Clone)]
pub struct FormularioService {
    api: Arc<dyn PortalApi>,
    carga: CargaService,
}

impl FormularioService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            carga: CargaService::new(api.clone()),
            api,
        }
    }

    pub async fn submeter_cliente(
        &self,
        sessao: &mut Sessao,
        form: &FormCliente,
    ) -> Result<FormCliente, AppError> {
        let payload = form.payload()?;
        self.api.criar_cliente(&payload).await?;
        tracing::info!("✅ Cliente cadastrado: {}", payload.nome);

        self.recarregar_painel(sessao).await;
        Ok(FormCliente::default())
    }

    pub async fn submeter_servico(
        &self,
        sessao: &mut Sessao,
        form: &FormServico,
    ) -> Result<FormServico, AppError> {
        let payload = form.payload()?;
        self.api.criar_servico(&payload).await?;
        tracing::info!("✅ Serviço cadastrado: {}", payload.nome_aparelho);

        self.recarregar_painel(sessao).await;
        Ok(FormServico::default())
    }

    pub async fn submeter_promocao(
        &self,
        sessao: &mut Sessao,
        form: &FormPromocao,
    ) -> Result<FormPromocao, AppError> {
        let payload = form.payload()?;
        self.api.criar_promocao(&payload).await?;
        tracing::info!("✅ Promoção cadastrada: {}", payload.titulo);

        self.recarregar_painel(sessao).await;
        Ok(FormPromocao::default())
    }

    async fn recarregar_painel(&self, sessao: &mut Sessao) {
        let epoca = sessao.epoca();
        let carga = self.carga.carregar_admin().await;
        sessao.aplicar_carga_admin(epoca, carga);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atualizar_campo_devolve_um_formulario_novo() {
        let vazio = FormCliente::default();
        let preenchido = vazio.clone().com_nome("Maria").com_cpf("123.456.789-01");

        assert_eq!(vazio, FormCliente::default());
        assert_eq!(preenchido.nome, "Maria");
        // A máscara derruba a pontuação na hora.
        assert_eq!(preenchido.cpf, "12345678901");
    }

    #[test]
    fn valor_nao_numerico_e_recusado_na_digitacao() {
        let resultado = FormServico::default().com_valor_servico("abc");
        assert!(matches!(resultado, Err(AppError::ValidacaoFalhou(_))));
    }

    #[test]
    fn valor_com_virgula_decimal_e_aceito() {
        let form = FormServico::default().com_valor_servico("250,50").unwrap();
        assert_eq!(form.valor_servico, Decimal::new(25050, 2));
    }

    #[test]
    fn data_invalida_e_recusada_na_digitacao() {
        let resultado = FormServico::default().com_data_servico("31/02/2024");
        assert!(matches!(resultado, Err(AppError::ValidacaoFalhou(_))));
    }

    #[test]
    fn payload_de_cliente_exige_cpf_com_onze_digitos() {
        let form = FormCliente::default().com_nome("Maria").com_cpf("123");
        assert!(matches!(form.payload(), Err(AppError::ValidacaoFalhou(_))));
    }

    #[test]
    fn payload_de_servico_exige_as_duas_datas() {
        let form = FormServico::default()
            .com_cliente_cpf("12345678901")
            .com_nome_aparelho("iPhone 12")
            .com_tipo_servico("Troca de tela");
        assert!(matches!(form.payload(), Err(AppError::ValidacaoFalhou(_))));
    }

    #[test]
    fn promocao_nova_nasce_ativa() {
        assert!(FormPromocao::default().ativa);
    }
}
