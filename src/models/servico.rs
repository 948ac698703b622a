// src/models/servico.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- SERVIÇO (ordem de reparo de um aparelho) ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Servico {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Chave estrangeira: o CPF do cliente dono do aparelho.
    pub cliente_cpf: String,

    pub nome_aparelho: String,
    pub imei: String,
    pub cor: String,
    pub tipo_servico: String,

    pub data_servico: NaiveDate,
    pub data_fim_garantia: NaiveDate,

    pub valor_servico: Decimal,

    pub tem_seguro: bool,
    // Só tem significado quando tem_seguro = true.
    #[serde(default)]
    pub valor_seguro: Decimal,

    // Calculado pelo servidor: quantos dias faltam para o seguro acabar.
    #[serde(default)]
    pub dias_seguro_restantes: Option<i64>,
}

// --- PAYLOAD DE CRIAÇÃO ---

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct NovoServico {
    #[validate(length(equal = 11, message = "O CPF do cliente deve ter 11 dígitos"))]
    pub cliente_cpf: String,

    #[validate(length(min = 1, message = "O nome do aparelho é obrigatório"))]
    pub nome_aparelho: String,

    pub imei: String,
    pub cor: String,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório"))]
    pub tipo_servico: String,

    pub data_servico: NaiveDate,
    pub data_fim_garantia: NaiveDate,

    pub valor_servico: Decimal,

    pub tem_seguro: bool,
    pub valor_seguro: Decimal,
}
