// src/models/cliente.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// --- CLIENTE (como o backend devolve) ---

// O backend às vezes manda o id como `_id` (herança do Mongo),
// então aceitamos os dois nomes na desserialização.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cliente {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub nome: String,

    // 11 dígitos, sem máscara. A máscara é só na exibição.
    pub cpf: String,

    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// --- PAYLOAD DE CRIAÇÃO (sem id, quem gera é o backend) ---

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct NovoCliente {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nome: String,

    #[validate(length(equal = 11, message = "O CPF deve ter 11 dígitos"))]
    pub cpf: String,

    // O formulário manda string vazia quando não preenchido,
    // igual ao portal de sempre.
    pub telefone: String,
    pub email: String,
}
