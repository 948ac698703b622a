// src/config.rs

use std::{env, sync::Arc};

use crate::{
    api::{LojaApi, PortalApi},
    services::{AuthService, CargaService, FormularioService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub carga_service: CargaService,
    pub formulario_service: FormularioService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Sem API_URL não tem portal: falha na subida mesmo.
        let api_url = env::var("API_URL").expect("API_URL deve ser definida");
        tracing::info!("✅ Portal apontando para {}", api_url);

        // --- Monta o gráfico de dependências ---
        let api: Arc<dyn PortalApi> = Arc::new(LojaApi::new(api_url));

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            carga_service: CargaService::new(api.clone()),
            formulario_service: FormularioService::new(api),
        })
    }
}
