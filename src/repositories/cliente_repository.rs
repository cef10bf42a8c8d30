//! Repositório de Clientes

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, NovoCliente};
use crate::utils::errors::{AppError, AppResult};

pub(crate) const ERRO_CPF_DUPLICADO: &str = "Já existe um cliente com este CPF";

/// Operações de persistência de clientes
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn list_active(&self) -> AppResult<Vec<Cliente>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cliente>>;
    async fn cpf_exists(&self, cpf: &str) -> AppResult<bool>;
    async fn create(&self, novo: NovoCliente) -> AppResult<Cliente>;
    async fn update(&self, id: i32, dados: NovoCliente) -> AppResult<Option<Cliente>>;
    async fn soft_delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgClienteRepository {
    pool: PgPool,
}

impl PgClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteRepository for PgClienteRepository {
    async fn list_active(&self) -> AppResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, cpf, telefone, ativo FROM clientes WHERE ativo = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cliente>> {
        // A consulta por id devolve inclusive registros inativos
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, cpf, telefone, ativo FROM clientes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    async fn cpf_exists(&self, cpf: &str) -> AppResult<bool> {
        let existe =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clientes WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await?;

        Ok(existe)
    }

    async fn create(&self, novo: NovoCliente) -> AppResult<Cliente> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, cpf, telefone, ativo)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id, nome, cpf, telefone, ativo
            "#,
        )
        .bind(&novo.nome)
        .bind(&novo.cpf)
        .bind(&novo.telefone)
        .fetch_one(&self.pool)
        .await
        .map_err(traduzir_violacao_cpf)?;

        Ok(cliente)
    }

    async fn update(&self, id: i32, dados: NovoCliente) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $2, cpf = $3, telefone = $4
            WHERE id = $1
            RETURNING id, nome, cpf, telefone, ativo
            "#,
        )
        .bind(id)
        .bind(&dados.nome)
        .bind(&dados.cpf)
        .bind(&dados.telefone)
        .fetch_optional(&self.pool)
        .await
        .map_err(traduzir_violacao_cpf)?;

        Ok(cliente)
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("UPDATE clientes SET ativo = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// 23505 = unique_violation (índice único de cpf)
fn traduzir_violacao_cpf(e: sqlx::Error) -> AppError {
    let codigo = e
        .as_database_error()
        .and_then(|d| d.code().map(|c| c.into_owned()));

    match codigo.as_deref() {
        Some("23505") => AppError::Conflict(ERRO_CPF_DUPLICADO.to_string()),
        _ => AppError::Database(e),
    }
}
