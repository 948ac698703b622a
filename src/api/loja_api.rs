// src/api/loja_api.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    common::error::AppError,
    models::{Cliente, NovaPromocao, NovoCliente, NovoServico, Promocao, Servico},
};

// A interface remota do portal, um método por endpoint do backend.
// É um trait para os serviços poderem ser exercitados com dublês nos testes.
#[async_trait]
pub trait PortalApi: Send + Sync {
    async fn login(&self, cpf: &str) -> Result<Cliente, AppError>;
    async fn servicos_do_cliente(&self, cpf: &str) -> Result<Vec<Servico>, AppError>;
    async fn promocoes(&self) -> Result<Vec<Promocao>, AppError>;
    async fn todos_clientes(&self) -> Result<Vec<Cliente>, AppError>;
    async fn todos_servicos(&self) -> Result<Vec<Servico>, AppError>;
    async fn criar_cliente(&self, payload: &NovoCliente) -> Result<(), AppError>;
    async fn criar_servico(&self, payload: &NovoServico) -> Result<(), AppError>;
    async fn criar_promocao(&self, payload: &NovaPromocao) -> Result<(), AppError>;
}

#[derive(Debug, Deserialize)]
struct RespostaLogin {
    cliente: Cliente,
}

// Respostas não-2xx vêm como `{"detail": "..."}`; o detail vai direto
// para o usuário.
#[derive(Debug, Deserialize)]
struct RespostaErro {
    detail: String,
}

// A implementação de verdade, falando JSON sobre HTTP com o backend da loja.
// Sem retry, sem cache: a sessão sempre reflete o estado remoto da hora.
#[derive(Clone)]
pub struct LojaApi {
    http: Client,
    base_url: String,
}

impl LojaApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn detalhe_do_erro(resposta: reqwest::Response, padrao: &str) -> String {
        resposta
            .json::<RespostaErro>()
            .await
            .map(|erro| erro.detail)
            .unwrap_or_else(|_| padrao.to_string())
    }

    async fn buscar_lista<T: DeserializeOwned>(&self, caminho: &str) -> Result<Vec<T>, AppError> {
        let resposta = self
            .http
            .get(format!("{}{}", self.base_url, caminho))
            .send()
            .await?;
        Ok(resposta.error_for_status()?.json().await?)
    }

    async fn criar<P: serde::Serialize + Sync>(
        &self,
        caminho: &str,
        recurso: &'static str,
        payload: &P,
    ) -> Result<(), AppError> {
        let resposta = self
            .http
            .post(format!("{}{}", self.base_url, caminho))
            .json(payload)
            .send()
            .await?;

        if !resposta.status().is_success() {
            let detalhe = Self::detalhe_do_erro(resposta, "Erro ao salvar").await;
            return Err(AppError::CadastroRecusado { recurso, detalhe });
        }
        Ok(())
    }
}

#[async_trait]
impl PortalApi for LojaApi {
    async fn login(&self, cpf: &str) -> Result<Cliente, AppError> {
        let resposta = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&serde_json::json!({ "cpf": cpf }))
            .send()
            .await?;

        if !resposta.status().is_success() {
            let detalhe = Self::detalhe_do_erro(resposta, "Erro ao fazer login").await;
            return Err(AppError::LoginRecusado(detalhe));
        }

        let corpo: RespostaLogin = resposta.json().await?;
        Ok(corpo.cliente)
    }

    async fn servicos_do_cliente(&self, cpf: &str) -> Result<Vec<Servico>, AppError> {
        self.buscar_lista(&format!("/api/cliente/{}/servicos", cpf))
            .await
    }

    async fn promocoes(&self) -> Result<Vec<Promocao>, AppError> {
        self.buscar_lista("/api/promocoes").await
    }

    async fn todos_clientes(&self) -> Result<Vec<Cliente>, AppError> {
        self.buscar_lista("/api/admin/clientes").await
    }

    async fn todos_servicos(&self) -> Result<Vec<Servico>, AppError> {
        self.buscar_lista("/api/admin/servicos").await
    }

    async fn criar_cliente(&self, payload: &NovoCliente) -> Result<(), AppError> {
        self.criar("/api/admin/cliente", "cliente", payload).await
    }

    async fn criar_servico(&self, payload: &NovoServico) -> Result<(), AppError> {
        self.criar("/api/admin/servico", "serviço", payload).await
    }

    async fn criar_promocao(&self, payload: &NovaPromocao) -> Result<(), AppError> {
        self.criar("/api/admin/promocao", "promoção", payload).await
    }
}
