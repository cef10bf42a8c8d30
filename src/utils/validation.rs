//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de dados
//! e conversão de tipos usadas pelos controllers.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Converte o parâmetro de rota em id numérico. Apenas inteiros
/// estritamente positivos são aceitos.
pub fn parse_id(valor: &str) -> Result<i32, AppError> {
    match valor.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("ID incorreto".to_string())),
    }
}

/// Valida e converte string para data no formato YYYY-MM-DD
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Valida que um string não está vazio depois do trim
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Valida que um valor é estritamente positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);

        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn test_parse_id_mensagem() {
        match parse_id("abc") {
            Err(AppError::BadRequest(mensagem)) => assert_eq!(mensagem, "ID incorreto"),
            outro => panic!("esperava BadRequest, veio {:?}", outro),
        }
    }

    #[test]
    fn test_validate_date() {
        let valida = "2024-01-15";
        assert!(validate_date(valida).is_ok());

        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("15-01-2024").is_err());
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("ontem").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("ana").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0.5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5.0).is_err());
    }
}
