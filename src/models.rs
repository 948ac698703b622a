pub mod cliente;
pub use cliente::{Cliente, NovoCliente};
pub mod servico;
pub use servico::{NovoServico, Servico};
pub mod promocao;
pub use promocao::{NovaPromocao, Promocao};
