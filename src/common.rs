pub mod error;
pub mod formato;
