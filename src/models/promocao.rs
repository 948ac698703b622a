// src/models/promocao.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- PROMOÇÃO (global, não pertence a nenhum cliente) ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promocao {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub titulo: String,
    pub descricao: String,

    // Texto livre: "20%", "R$ 50"...
    pub desconto: String,

    pub data_validade: NaiveDate,
    pub ativa: bool,
}

// --- PAYLOAD DE CRIAÇÃO ---

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct NovaPromocao {
    #[validate(length(min = 1, message = "O título é obrigatório"))]
    pub titulo: String,

    pub descricao: String,

    #[validate(length(min = 1, message = "O desconto é obrigatório"))]
    pub desconto: String,

    pub data_validade: NaiveDate,
    pub ativa: bool,
}
