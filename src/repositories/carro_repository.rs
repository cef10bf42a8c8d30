//! Repositório de Carros

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::carro::{Carro, NovoCarro};
use crate::utils::errors::AppResult;

/// Operações de persistência de carros
#[async_trait]
pub trait CarroRepository: Send + Sync {
    async fn list_active(&self) -> AppResult<Vec<Carro>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Carro>>;
    async fn create(&self, novo: NovoCarro) -> AppResult<Carro>;
    async fn update(&self, id: i32, dados: NovoCarro) -> AppResult<Option<Carro>>;
    async fn soft_delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgCarroRepository {
    pool: PgPool,
}

impl PgCarroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarroRepository for PgCarroRepository {
    async fn list_active(&self) -> AppResult<Vec<Carro>> {
        let carros = sqlx::query_as::<_, Carro>(
            "SELECT id, marca, modelo, ano, cor, ativo FROM carros WHERE ativo = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(carros)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Carro>> {
        let carro = sqlx::query_as::<_, Carro>(
            "SELECT id, marca, modelo, ano, cor, ativo FROM carros WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(carro)
    }

    async fn create(&self, novo: NovoCarro) -> AppResult<Carro> {
        let carro = sqlx::query_as::<_, Carro>(
            r#"
            INSERT INTO carros (marca, modelo, ano, cor, ativo)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, marca, modelo, ano, cor, ativo
            "#,
        )
        .bind(&novo.marca)
        .bind(&novo.modelo)
        .bind(novo.ano)
        .bind(&novo.cor)
        .fetch_one(&self.pool)
        .await?;

        Ok(carro)
    }

    async fn update(&self, id: i32, dados: NovoCarro) -> AppResult<Option<Carro>> {
        let carro = sqlx::query_as::<_, Carro>(
            r#"
            UPDATE carros
            SET marca = $2, modelo = $3, ano = $4, cor = $5
            WHERE id = $1
            RETURNING id, marca, modelo, ano, cor, ativo
            "#,
        )
        .bind(id)
        .bind(&dados.marca)
        .bind(&dados.modelo)
        .bind(dados.ano)
        .bind(&dados.cor)
        .fetch_optional(&self.pool)
        .await?;

        Ok(carro)
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("UPDATE carros SET ativo = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
