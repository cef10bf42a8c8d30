//! Repositório de Pedidos
//!
//! As consultas de pedido sempre trazem o join com clientes e carros para
//! devolver a visão denormalizada exibida pelo front-end.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::pedido::{NovoPedido, PedidoDetalhe};
use crate::utils::errors::{AppError, AppResult};

pub(crate) const ERRO_FK_PEDIDO: &str = "Cliente ou carro informado não existe";

const SELECT_DETALHE: &str = r#"
SELECT p.id, p.cliente_id, c.nome AS nome_cliente, p.carro_id,
       ca.marca AS marca_carro, ca.modelo AS modelo_carro,
       p.data_pedido, p.valor_pedido, p.ativo
FROM pedidos p
JOIN clientes c ON c.id = p.cliente_id
JOIN carros ca ON ca.id = p.carro_id
"#;

/// Operações de persistência de pedidos
#[async_trait]
pub trait PedidoRepository: Send + Sync {
    async fn list_active(&self) -> AppResult<Vec<PedidoDetalhe>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<PedidoDetalhe>>;
    async fn create(&self, novo: NovoPedido) -> AppResult<PedidoDetalhe>;
    async fn update(&self, id: i32, dados: NovoPedido) -> AppResult<Option<PedidoDetalhe>>;
    async fn soft_delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgPedidoRepository {
    pool: PgPool,
}

impl PgPedidoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PedidoRepository for PgPedidoRepository {
    async fn list_active(&self) -> AppResult<Vec<PedidoDetalhe>> {
        let sql = format!("{} WHERE p.ativo = TRUE ORDER BY p.id", SELECT_DETALHE);
        let pedidos = sqlx::query_as::<_, PedidoDetalhe>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(pedidos)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PedidoDetalhe>> {
        let sql = format!("{} WHERE p.id = $1", SELECT_DETALHE);
        let pedido = sqlx::query_as::<_, PedidoDetalhe>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pedido)
    }

    async fn create(&self, novo: NovoPedido) -> AppResult<PedidoDetalhe> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO pedidos (cliente_id, carro_id, data_pedido, valor_pedido, ativo)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id
            "#,
        )
        .bind(novo.cliente_id)
        .bind(novo.carro_id)
        .bind(novo.data_pedido)
        .bind(novo.valor_pedido)
        .fetch_one(&self.pool)
        .await
        .map_err(traduzir_violacao_fk)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pedido não encontrado".to_string()))
    }

    async fn update(&self, id: i32, dados: NovoPedido) -> AppResult<Option<PedidoDetalhe>> {
        let result = sqlx::query(
            r#"
            UPDATE pedidos
            SET cliente_id = $2, carro_id = $3, data_pedido = $4, valor_pedido = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(dados.cliente_id)
        .bind(dados.carro_id)
        .bind(dados.data_pedido)
        .bind(dados.valor_pedido)
        .execute(&self.pool)
        .await
        .map_err(traduzir_violacao_fk)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("UPDATE pedidos SET ativo = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// 23503 = foreign_key_violation (cliente_id ou carro_id inexistente)
fn traduzir_violacao_fk(e: sqlx::Error) -> AppError {
    let codigo = e
        .as_database_error()
        .and_then(|d| d.code().map(|c| c.into_owned()));

    match codigo.as_deref() {
        Some("23503") => AppError::BadRequest(ERRO_FK_PEDIDO.to_string()),
        _ => AppError::Database(e),
    }
}
