use serde::{Deserialize, Serialize};

use crate::models::carro::Carro;

// Corpo aceito em POST/PUT de carros
#[derive(Debug, Default, Deserialize)]
pub struct CarroRequest {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub cor: Option<String>,
}

// Response de carro
#[derive(Debug, Serialize)]
pub struct CarroResponse {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub ativo: bool,
}

impl From<Carro> for CarroResponse {
    fn from(carro: Carro) -> Self {
        Self {
            id: carro.id,
            marca: carro.marca,
            modelo: carro.modelo,
            ano: carro.ano,
            cor: carro.cor,
            ativo: carro.ativo,
        }
    }
}
