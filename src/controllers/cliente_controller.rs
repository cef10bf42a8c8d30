//! Controller de Clientes

use std::sync::Arc;

use crate::dto::cliente_dto::{ClienteRequest, ClienteResponse};
use crate::models::cliente::NovoCliente;
use crate::repositories::cliente_repository::{ClienteRepository, ERRO_CPF_DUPLICADO};
use crate::utils::errors::{campos_invalidos, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct ClienteController {
    repository: Arc<dyn ClienteRepository>,
}

impl ClienteController {
    pub fn new(repository: Arc<dyn ClienteRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ClienteResponse>> {
        let clientes = self.repository.list_active().await?;
        Ok(clientes.into_iter().map(ClienteResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<ClienteResponse>> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(ClienteResponse::from))
    }

    pub async fn create(&self, request: ClienteRequest) -> AppResult<ClienteResponse> {
        let novo = validar(request)?;

        if self.repository.cpf_exists(&novo.cpf).await? {
            return Err(AppError::Conflict(ERRO_CPF_DUPLICADO.to_string()));
        }

        let cliente = self.repository.create(novo).await?;
        Ok(ClienteResponse::from(cliente))
    }

    pub async fn update(&self, id: i32, request: ClienteRequest) -> AppResult<ClienteResponse> {
        let dados = validar(request)?;

        let cliente = self
            .repository
            .update(id, dados)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        Ok(ClienteResponse::from(cliente))
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }
        Ok(())
    }
}

/// Campos obrigatórios: nome, cpf e telefone. O nome é gravado em maiúsculas.
fn validar(request: ClienteRequest) -> AppResult<NovoCliente> {
    let mut campos: Vec<&'static str> = Vec::new();

    let nome = request.nome.unwrap_or_default();
    let cpf = request.cpf.unwrap_or_default();
    let telefone = request.telefone.unwrap_or_default();

    if validate_not_empty(&nome).is_err() {
        campos.push("nome");
    }
    if validate_not_empty(&cpf).is_err() {
        campos.push("cpf");
    }
    if validate_not_empty(&telefone).is_err() {
        campos.push("telefone");
    }

    if !campos.is_empty() {
        return Err(campos_invalidos(&campos));
    }

    Ok(NovoCliente {
        nome: nome.trim().to_uppercase(),
        cpf: cpf.trim().to_string(),
        telefone: telefone.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{MemClienteRepository, MemoryDb};

    fn request(nome: &str, cpf: &str, telefone: &str) -> ClienteRequest {
        ClienteRequest {
            nome: Some(nome.to_string()),
            cpf: Some(cpf.to_string()),
            telefone: Some(telefone.to_string()),
        }
    }

    fn controller() -> ClienteController {
        ClienteController::new(Arc::new(MemClienteRepository::new(MemoryDb::new())))
    }

    #[test]
    fn test_validar_aponta_campos_ausentes() {
        let erro = validar(ClienteRequest::default()).unwrap_err();
        match erro {
            AppError::Validation(erros) => {
                let campos = erros.field_errors();
                assert!(campos.contains_key("nome"));
                assert!(campos.contains_key("cpf"));
                assert!(campos.contains_key("telefone"));
            }
            outro => panic!("esperava erro de validação, veio {:?}", outro),
        }
    }

    #[test]
    fn test_validar_rejeita_campo_so_com_espacos() {
        let erro = validar(request("   ", "11122233344", "11999999999")).unwrap_err();
        match erro {
            AppError::Validation(erros) => {
                assert!(erros.field_errors().contains_key("nome"));
                assert_eq!(erros.field_errors().len(), 1);
            }
            outro => panic!("esperava erro de validação, veio {:?}", outro),
        }
    }

    #[test]
    fn test_validar_normaliza_nome_em_maiusculas() {
        let novo = validar(request(" ana ", " 11122233344 ", "11999999999")).unwrap();
        assert_eq!(novo.nome, "ANA");
        assert_eq!(novo.cpf, "11122233344");
    }

    #[tokio::test]
    async fn test_create_e_get_devolvem_nome_normalizado() {
        let controller = controller();

        let criado = controller
            .create(request("ana", "11122233344", "11999999999"))
            .await
            .unwrap();
        assert_eq!(criado.nome, "ANA");

        let consultado = controller.get_by_id(criado.id).await.unwrap().unwrap();
        assert_eq!(consultado.nome, "ANA");
        assert_eq!(consultado.cpf, "11122233344");
        assert!(consultado.ativo);
    }

    #[tokio::test]
    async fn test_create_com_cpf_repetido_gera_conflito() {
        let controller = controller();

        controller
            .create(request("ana", "11122233344", "11999999999"))
            .await
            .unwrap();

        let erro = controller
            .create(request("bia", "11122233344", "11888888888"))
            .await;
        assert!(matches!(erro, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_de_id_inexistente_falha() {
        let controller = controller();

        let erro = controller
            .update(999, request("ana", "11122233344", "11999999999"))
            .await;
        assert!(matches!(erro, Err(AppError::NotFound(_))));
    }
}
