use serde::{Deserialize, Serialize};

use crate::models::cliente::Cliente;

// Corpo aceito em POST/PUT de clientes. Os campos chegam opcionais para a
// validação conseguir apontar exatamente quais estão ausentes.
#[derive(Debug, Default, Deserialize)]
pub struct ClienteRequest {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub ativo: bool,
}

impl From<Cliente> for ClienteResponse {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            nome: cliente.nome,
            cpf: cliente.cpf,
            telefone: cliente.telefone,
            ativo: cliente.ativo,
        }
    }
}
