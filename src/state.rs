//! Shared application state
//!
//! Este módulo define o estado compartilhado passado pelo router do Axum.
//! Os repositórios são injetados como trait objects para os testes poderem
//! trocar o PostgreSQL pela implementação em memória.

use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::carro_repository::{CarroRepository, PgCarroRepository};
use crate::repositories::cliente_repository::{ClienteRepository, PgClienteRepository};
use crate::repositories::pedido_repository::{PedidoRepository, PgPedidoRepository};

#[derive(Clone)]
pub struct AppState {
    pub clientes: Arc<dyn ClienteRepository>,
    pub carros: Arc<dyn CarroRepository>,
    pub pedidos: Arc<dyn PedidoRepository>,
}

impl AppState {
    /// Estado padrão: repositórios ligados ao pool do PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self {
            clientes: Arc::new(PgClienteRepository::new(pool.clone())),
            carros: Arc::new(PgCarroRepository::new(pool.clone())),
            pedidos: Arc::new(PgPedidoRepository::new(pool)),
        }
    }

    /// Estado com implementações arbitrárias de repositório
    pub fn with_repositories(
        clientes: Arc<dyn ClienteRepository>,
        carros: Arc<dyn CarroRepository>,
        pedidos: Arc<dyn PedidoRepository>,
    ) -> Self {
        Self {
            clientes,
            carros,
            pedidos,
        }
    }
}
