//! Tratamento de erros
//!
//! Este módulo define o enum de erros tipados da aplicação e sua conversão
//! para respostas HTTP. Erros de banco são logados aqui e respondidos com
//! uma mensagem genérica de 500; os demais carregam a mensagem visível ao
//! cliente da API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Erros da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => {
                tracing::error!("Erro de banco de dados: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "mensagem": "Erro interno no servidor" }),
                )
            }

            AppError::Validation(erros) => {
                let mut campos: Vec<&str> = erros.field_errors().keys().copied().collect();
                campos.sort_unstable();
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "mensagem": "Os campos a seguir estão ausentes ou com valores inválidos",
                        "campos": campos,
                    }),
                )
            }

            AppError::NotFound(mensagem) => (StatusCode::NOT_FOUND, json!({ "mensagem": mensagem })),

            AppError::Conflict(mensagem) => (StatusCode::CONFLICT, json!({ "mensagem": mensagem })),

            AppError::BadRequest(mensagem) => {
                (StatusCode::BAD_REQUEST, json!({ "mensagem": mensagem }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

/// Monta um erro de validação apontando os campos rejeitados
pub fn campos_invalidos(campos: &[&'static str]) -> AppError {
    let mut erros = ValidationErrors::new();
    for campo in campos.iter().copied() {
        let mut erro = ValidationError::new("invalido");
        erro.add_param("campo".into(), &campo);
        erros.add(campo, erro);
    }

    AppError::Validation(erros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campos_invalidos_lista_todos_os_campos() {
        let erro = campos_invalidos(&["dataPedido", "valorPedido"]);
        match erro {
            AppError::Validation(erros) => {
                let campos = erros.field_errors();
                assert_eq!(campos.len(), 2);
                assert!(campos.contains_key("dataPedido"));
                assert!(campos.contains_key("valorPedido"));
            }
            outro => panic!("esperava erro de validação, veio {:?}", outro),
        }
    }

    #[test]
    fn test_status_http_por_tipo_de_erro() {
        let casos = vec![
            (
                campos_invalidos(&["nome"]).into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("x".to_string()).into_response().status(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Conflict("x".to_string()).into_response().status(),
                StatusCode::CONFLICT,
            ),
            (
                AppError::BadRequest("x".to_string()).into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Database(sqlx::Error::RowNotFound)
                    .into_response()
                    .status(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (obtido, esperado) in casos {
            assert_eq!(obtido, esperado);
        }
    }
}
