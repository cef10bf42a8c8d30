//! Modelo de Cliente
//!
//! Mapeia a tabela `clientes`. A remoção é lógica: o campo `ativo` passa a
//! false, o registro sai das listagens mas continua disponível na consulta
//! por id.

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub ativo: bool,
}

/// Dados de cliente já validados e normalizados (nome em maiúsculas)
#[derive(Debug, Clone)]
pub struct NovoCliente {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}
