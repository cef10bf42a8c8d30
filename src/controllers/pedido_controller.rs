//! Controller de Pedidos
//!
//! Além da presença dos campos, o pedido valida a data (YYYY-MM-DD) e o
//! valor, que aceita número ou texto com vírgula decimal. A rejeição
//! acontece antes de qualquer acesso ao banco.

use std::sync::Arc;

use crate::dto::pedido_dto::{PedidoRequest, PedidoResponse};
use crate::models::pedido::NovoPedido;
use crate::repositories::pedido_repository::PedidoRepository;
use crate::utils::errors::{campos_invalidos, AppError, AppResult};
use crate::utils::validation::validate_date;

pub struct PedidoController {
    repository: Arc<dyn PedidoRepository>,
}

impl PedidoController {
    pub fn new(repository: Arc<dyn PedidoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PedidoResponse>> {
        let pedidos = self.repository.list_active().await?;
        Ok(pedidos.into_iter().map(PedidoResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<PedidoResponse>> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(PedidoResponse::from))
    }

    pub async fn create(&self, request: PedidoRequest) -> AppResult<PedidoResponse> {
        let novo = validar(request)?;
        let pedido = self.repository.create(novo).await?;
        Ok(PedidoResponse::from(pedido))
    }

    pub async fn update(&self, id: i32, request: PedidoRequest) -> AppResult<PedidoResponse> {
        let dados = validar(request)?;

        let pedido = self
            .repository
            .update(id, dados)
            .await?
            .ok_or_else(|| AppError::NotFound("Pedido não encontrado".to_string()))?;

        Ok(PedidoResponse::from(pedido))
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(AppError::NotFound("Pedido não encontrado".to_string()));
        }
        Ok(())
    }
}

/// Campos obrigatórios: clienteId, carroId, dataPedido e valorPedido
fn validar(request: PedidoRequest) -> AppResult<NovoPedido> {
    let mut campos: Vec<&'static str> = Vec::new();

    let cliente_id = match request.cliente_id {
        Some(id) if id > 0 => Some(id),
        _ => {
            campos.push("clienteId");
            None
        }
    };

    let carro_id = match request.carro_id {
        Some(id) if id > 0 => Some(id),
        _ => {
            campos.push("carroId");
            None
        }
    };

    let data_pedido = match request.data_pedido.as_deref().map(str::trim) {
        Some(texto) if !texto.is_empty() => match validate_date(texto) {
            Ok(data) => Some(data),
            Err(_) => {
                campos.push("dataPedido");
                None
            }
        },
        _ => {
            campos.push("dataPedido");
            None
        }
    };

    let valor_pedido = match request.valor_pedido.as_ref().and_then(|v| v.normalizar()) {
        Some(valor) => Some(valor),
        None => {
            campos.push("valorPedido");
            None
        }
    };

    if let (Some(cliente_id), Some(carro_id), Some(data_pedido), Some(valor_pedido)) =
        (cliente_id, carro_id, data_pedido, valor_pedido)
    {
        Ok(NovoPedido {
            cliente_id,
            carro_id,
            data_pedido,
            valor_pedido,
        })
    } else {
        Err(campos_invalidos(&campos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::pedido_dto::ValorPedido;
    use crate::models::cliente::NovoCliente;
    use crate::models::carro::NovoCarro;
    use crate::repositories::carro_repository::CarroRepository;
    use crate::repositories::cliente_repository::ClienteRepository;
    use crate::repositories::memory::{
        MemCarroRepository, MemClienteRepository, MemPedidoRepository, MemoryDb,
    };
    use rust_decimal::Decimal;

    fn request_valido(cliente_id: i32, carro_id: i32) -> PedidoRequest {
        PedidoRequest {
            cliente_id: Some(cliente_id),
            carro_id: Some(carro_id),
            data_pedido: Some("2024-01-15".to_string()),
            valor_pedido: Some(ValorPedido::Texto("1500,50".to_string())),
        }
    }

    async fn cenario() -> (PedidoController, i32, i32) {
        let db = MemoryDb::new();
        let clientes = MemClienteRepository::new(db.clone());
        let carros = MemCarroRepository::new(db.clone());

        let cliente = clientes
            .create(NovoCliente {
                nome: "ANA".to_string(),
                cpf: "11122233344".to_string(),
                telefone: "11999999999".to_string(),
            })
            .await
            .unwrap();

        let carro = carros
            .create(NovoCarro {
                marca: "FIAT".to_string(),
                modelo: "UNO".to_string(),
                ano: 2012,
                cor: "PRATA".to_string(),
            })
            .await
            .unwrap();

        let controller = PedidoController::new(Arc::new(MemPedidoRepository::new(db)));
        (controller, cliente.id, carro.id)
    }

    #[test]
    fn test_validar_aponta_data_e_valor_invalidos() {
        let request = PedidoRequest {
            cliente_id: Some(1),
            carro_id: Some(1),
            data_pedido: Some("15/01/2024".to_string()),
            valor_pedido: Some(ValorPedido::Numero(-10.0)),
        };

        match validar(request).unwrap_err() {
            AppError::Validation(erros) => {
                let campos = erros.field_errors();
                assert_eq!(campos.len(), 2);
                assert!(campos.contains_key("dataPedido"));
                assert!(campos.contains_key("valorPedido"));
            }
            outro => panic!("esperava erro de validação, veio {:?}", outro),
        }
    }

    #[test]
    fn test_validar_normaliza_valor_com_virgula() {
        let novo = validar(request_valido(1, 2)).unwrap();
        assert_eq!(novo.valor_pedido, Decimal::new(150050, 2));
        assert_eq!(
            novo.data_pedido,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_devolve_visao_denormalizada() {
        let (controller, cliente_id, carro_id) = cenario().await;

        let pedido = controller
            .create(request_valido(cliente_id, carro_id))
            .await
            .unwrap();

        assert_eq!(pedido.nome_cliente, "ANA");
        assert_eq!(pedido.marca_carro, "FIAT");
        assert_eq!(pedido.valor_pedido, 1500.50);
    }

    #[tokio::test]
    async fn test_create_rejeita_sem_tocar_o_banco() {
        let (controller, _, _) = cenario().await;

        let erro = controller.create(PedidoRequest::default()).await;
        assert!(matches!(erro, Err(AppError::Validation(_))));
        assert!(controller.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_com_referencias_inexistentes_falha() {
        let (controller, _, _) = cenario().await;

        let erro = controller.create(request_valido(999, 999)).await;
        assert!(matches!(erro, Err(AppError::BadRequest(_))));
    }
}
