pub mod auth_service;
pub use auth_service::AuthService;
pub mod carga_service;
pub use carga_service::CargaService;
pub mod form_service;
pub use form_service::FormularioService;
