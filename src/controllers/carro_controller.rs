//! Controller de Carros

use std::sync::Arc;

use crate::dto::carro_dto::{CarroRequest, CarroResponse};
use crate::models::carro::NovoCarro;
use crate::repositories::carro_repository::CarroRepository;
use crate::utils::errors::{campos_invalidos, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct CarroController {
    repository: Arc<dyn CarroRepository>,
}

impl CarroController {
    pub fn new(repository: Arc<dyn CarroRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<CarroResponse>> {
        let carros = self.repository.list_active().await?;
        Ok(carros.into_iter().map(CarroResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<CarroResponse>> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(CarroResponse::from))
    }

    pub async fn create(&self, request: CarroRequest) -> AppResult<CarroResponse> {
        let novo = validar(request)?;
        let carro = self.repository.create(novo).await?;
        Ok(CarroResponse::from(carro))
    }

    pub async fn update(&self, id: i32, request: CarroRequest) -> AppResult<CarroResponse> {
        let dados = validar(request)?;

        let carro = self
            .repository
            .update(id, dados)
            .await?
            .ok_or_else(|| AppError::NotFound("Carro não encontrado".to_string()))?;

        Ok(CarroResponse::from(carro))
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(AppError::NotFound("Carro não encontrado".to_string()));
        }
        Ok(())
    }
}

/// Campos obrigatórios: marca, modelo, ano e cor. Os textos são gravados
/// em maiúsculas.
fn validar(request: CarroRequest) -> AppResult<NovoCarro> {
    let mut campos: Vec<&'static str> = Vec::new();

    let marca = request.marca.unwrap_or_default();
    let modelo = request.modelo.unwrap_or_default();
    let cor = request.cor.unwrap_or_default();

    if validate_not_empty(&marca).is_err() {
        campos.push("marca");
    }
    if validate_not_empty(&modelo).is_err() {
        campos.push("modelo");
    }
    if request.ano.is_none() {
        campos.push("ano");
    }
    if validate_not_empty(&cor).is_err() {
        campos.push("cor");
    }

    match request.ano {
        Some(ano) if campos.is_empty() => Ok(NovoCarro {
            marca: marca.trim().to_uppercase(),
            modelo: modelo.trim().to_uppercase(),
            ano,
            cor: cor.trim().to_uppercase(),
        }),
        _ => Err(campos_invalidos(&campos)),
    }
}
