// src/common/formato.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

// Regras de exibição usadas em todas as telas:
// CPF agrupado, datas no calendário brasileiro, dinheiro com dois decimais.

pub fn apenas_digitos(bruto: &str) -> String {
    bruto.chars().filter(|c| c.is_ascii_digit()).collect()
}

// "12345678901" -> "123.456.789-01".
// Primeiro tira tudo que não é dígito, então aplicar duas vezes dá no mesmo.
// Se não sobrarem exatamente 11 dígitos, devolve só os dígitos, sem agrupar.
pub fn formatar_cpf(bruto: &str) -> String {
    let digitos = apenas_digitos(bruto);
    if digitos.len() != 11 {
        return digitos;
    }
    format!(
        "{}.{}.{}-{}",
        &digitos[..3],
        &digitos[3..6],
        &digitos[6..9],
        &digitos[9..]
    )
}

pub fn formatar_valor(valor: &Decimal) -> String {
    format!("R$ {:.2}", valor)
}

pub fn formatar_data(data: &NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrupa_cpf_de_onze_digitos() {
        assert_eq!(formatar_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn formatar_cpf_e_idempotente() {
        let uma_vez = formatar_cpf("12345678901");
        assert_eq!(formatar_cpf(&uma_vez), uma_vez);
    }

    #[test]
    fn cpf_incompleto_fica_sem_agrupamento() {
        assert_eq!(formatar_cpf("123.456"), "123456");
        assert_eq!(formatar_cpf(""), "");
    }

    #[test]
    fn valor_sempre_com_dois_decimais() {
        assert_eq!(formatar_valor(&Decimal::new(25000, 2)), "R$ 250.00");
        assert_eq!(formatar_valor(&Decimal::new(995, 1)), "R$ 99.50");
        assert_eq!(formatar_valor(&Decimal::ZERO), "R$ 0.00");
    }

    #[test]
    fn data_no_formato_brasileiro() {
        let data = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(formatar_data(&data), "09/03/2024");
    }
}
