use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::ClienteRequest;
use crate::dto::common::MensagemResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_id;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes).post(create_cliente))
        .route("/:id", get(get_cliente).put(update_cliente))
}

async fn list_clientes(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = ClienteController::new(state.clientes.clone());
    let clientes = controller.list().await?;
    Ok(Json(clientes).into_response())
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = ClienteController::new(state.clientes.clone());

    match controller.get_by_id(id).await? {
        Some(cliente) => Ok(Json(cliente).into_response()),
        // O front-end trata consulta sem resultado como 200 com aviso,
        // não como 404
        None => Ok(Json(MensagemResponse::new(
            "Nenhum cliente encontrado para o ID informado",
        ))
        .into_response()),
    }
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(request): Json<ClienteRequest>,
) -> Result<Response, AppError> {
    let controller = ClienteController::new(state.clientes.clone());
    let cliente = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(cliente)).into_response())
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ClienteRequest>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = ClienteController::new(state.clientes.clone());
    let cliente = controller.update(id, request).await?;
    Ok(Json(cliente).into_response())
}

pub async fn remove_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = ClienteController::new(state.clientes.clone());
    controller.remove(id).await?;
    Ok(Json(MensagemResponse::new("Cliente removido com sucesso")).into_response())
}
