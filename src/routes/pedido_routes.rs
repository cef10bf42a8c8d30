use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::pedido_controller::PedidoController;
use crate::dto::common::MensagemResponse;
use crate::dto::pedido_dto::PedidoRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_id;

pub fn create_pedido_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pedidos).post(create_pedido))
        .route("/:id", get(get_pedido).put(update_pedido))
}

async fn list_pedidos(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = PedidoController::new(state.pedidos.clone());
    let pedidos = controller.list().await?;
    Ok(Json(pedidos).into_response())
}

async fn get_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = PedidoController::new(state.pedidos.clone());

    match controller.get_by_id(id).await? {
        Some(pedido) => Ok(Json(pedido).into_response()),
        None => Ok(Json(MensagemResponse::new(
            "Nenhum pedido encontrado para o ID informado",
        ))
        .into_response()),
    }
}

async fn create_pedido(
    State(state): State<AppState>,
    Json(request): Json<PedidoRequest>,
) -> Result<Response, AppError> {
    let controller = PedidoController::new(state.pedidos.clone());
    let pedido = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(pedido)).into_response())
}

async fn update_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PedidoRequest>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = PedidoController::new(state.pedidos.clone());
    let pedido = controller.update(id, request).await?;
    Ok(Json(pedido).into_response())
}

pub async fn remove_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = PedidoController::new(state.pedidos.clone());
    controller.remove(id).await?;
    Ok(Json(MensagemResponse::new("Pedido removido com sucesso")).into_response())
}
