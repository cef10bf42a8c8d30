//! Tabela de rotas da API

pub mod carro_routes;
pub mod cliente_routes;
pub mod pedido_routes;

use axum::{routing::put, Router};

use crate::state::AppState;

/// Monta o router principal com os três recursos e as rotas de remoção
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/clients", cliente_routes::create_cliente_router())
        .nest("/api/cars", carro_routes::create_carro_router())
        .nest("/api/orders", pedido_routes::create_pedido_router())
        .nest("/api/remove", create_remove_router())
}

// A remoção lógica é exposta com PUT em /api/remove/<recurso>/:id,
// contrato herdado do front-end que consome esta API
fn create_remove_router() -> Router<AppState> {
    Router::new()
        .route("/clients/:id", put(cliente_routes::remove_cliente))
        .route("/cars/:id", put(carro_routes::remove_carro))
        .route("/orders/:id", put(pedido_routes::remove_pedido))
}
