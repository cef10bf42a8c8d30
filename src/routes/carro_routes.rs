use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::carro_controller::CarroController;
use crate::dto::carro_dto::CarroRequest;
use crate::dto::common::MensagemResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_id;

pub fn create_carro_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carros).post(create_carro))
        .route("/:id", get(get_carro).put(update_carro))
}

async fn list_carros(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = CarroController::new(state.carros.clone());
    let carros = controller.list().await?;
    Ok(Json(carros).into_response())
}

async fn get_carro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = CarroController::new(state.carros.clone());

    match controller.get_by_id(id).await? {
        Some(carro) => Ok(Json(carro).into_response()),
        None => Ok(Json(MensagemResponse::new(
            "Nenhum carro encontrado para o ID informado",
        ))
        .into_response()),
    }
}

async fn create_carro(
    State(state): State<AppState>,
    Json(request): Json<CarroRequest>,
) -> Result<Response, AppError> {
    let controller = CarroController::new(state.carros.clone());
    let carro = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(carro)).into_response())
}

async fn update_carro(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CarroRequest>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = CarroController::new(state.carros.clone());
    let carro = controller.update(id, request).await?;
    Ok(Json(carro).into_response())
}

pub async fn remove_carro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let controller = CarroController::new(state.carros.clone());
    controller.remove(id).await?;
    Ok(Json(MensagemResponse::new("Carro removido com sucesso")).into_response())
}
