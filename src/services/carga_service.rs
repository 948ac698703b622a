// src/services/carga_service.rs

use std::sync::Arc;

use crate::{
    api::PortalApi,
    common::error::AppError,
    models::{Cliente, Promocao, Servico},
};

// Resultado de uma carga de painel do cliente: um slot por fetch.
// Quem decide o que fazer com cada slot é `Sessao::aplicar_carga_cliente`.
pub struct CargaCliente {
    pub servicos: Result<Vec<Servico>, AppError>,
    pub promocoes: Result<Vec<Promocao>, AppError>,
}

pub struct CargaAdmin {
    pub clientes: Result<Vec<Cliente>, AppError>,
    pub servicos: Result<Vec<Servico>, AppError>,
    pub promocoes: Result<Vec<Promocao>, AppError>,
}

// As duas cargas do portal. Cada uma dispara seus fetches em paralelo e
// espera todos terminarem antes de devolver; sucesso parcial é tolerado.
#[derive(Clone)]
pub struct CargaService {
    api: Arc<dyn PortalApi>,
}

impl CargaService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    pub async fn carregar_cliente(&self, cpf: &str) -> CargaCliente {
        let (servicos, promocoes) =
            tokio::join!(self.api.servicos_do_cliente(cpf), self.api.promocoes());
        CargaCliente {
            servicos,
            promocoes,
        }
    }

    pub async fn carregar_admin(&self) -> CargaAdmin {
        let (clientes, servicos, promocoes) = tokio::join!(
            self.api.todos_clientes(),
            self.api.todos_servicos(),
            self.api.promocoes()
        );
        CargaAdmin {
            clientes,
            servicos,
            promocoes,
        }
    }
}
