pub mod loja_api;
pub use loja_api::{LojaApi, PortalApi};
