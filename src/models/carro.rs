//! Modelo de Carro

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Carro {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub ativo: bool,
}

/// Dados de carro já validados e normalizados (marca, modelo e cor em maiúsculas)
#[derive(Debug, Clone)]
pub struct NovoCarro {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
}
