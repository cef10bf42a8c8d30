//! Repositórios em memória
//!
//! Implementações alternativas dos traits de repositório, usadas pelos
//! testes. Reproduzem as regras que o PostgreSQL garante por schema:
//! unicidade de CPF, chaves estrangeiras de pedido e remoção lógica.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::carro::{Carro, NovoCarro};
use crate::models::cliente::{Cliente, NovoCliente};
use crate::models::pedido::{NovoPedido, Pedido, PedidoDetalhe};
use crate::repositories::carro_repository::CarroRepository;
use crate::repositories::cliente_repository::{ClienteRepository, ERRO_CPF_DUPLICADO};
use crate::repositories::pedido_repository::{PedidoRepository, ERRO_FK_PEDIDO};
use crate::utils::errors::{AppError, AppResult};

/// Armazenamento compartilhado entre os três repositórios
#[derive(Default)]
pub struct MemoryDb {
    clientes: RwLock<Vec<Cliente>>,
    carros: RwLock<Vec<Carro>>,
    pedidos: RwLock<Vec<Pedido>>,
}

impl MemoryDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn proximo_id<T>(itens: &[T], id_de: impl Fn(&T) -> i32) -> i32 {
    itens.iter().map(id_de).max().unwrap_or(0) + 1
}

pub struct MemClienteRepository {
    db: Arc<MemoryDb>,
}

impl MemClienteRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClienteRepository for MemClienteRepository {
    async fn list_active(&self) -> AppResult<Vec<Cliente>> {
        let clientes = self.db.clientes.read().await;
        Ok(clientes.iter().filter(|c| c.ativo).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cliente>> {
        let clientes = self.db.clientes.read().await;
        Ok(clientes.iter().find(|c| c.id == id).cloned())
    }

    async fn cpf_exists(&self, cpf: &str) -> AppResult<bool> {
        let clientes = self.db.clientes.read().await;
        Ok(clientes.iter().any(|c| c.cpf == cpf))
    }

    async fn create(&self, novo: NovoCliente) -> AppResult<Cliente> {
        let mut clientes = self.db.clientes.write().await;
        if clientes.iter().any(|c| c.cpf == novo.cpf) {
            return Err(AppError::Conflict(ERRO_CPF_DUPLICADO.to_string()));
        }

        let cliente = Cliente {
            id: proximo_id(&clientes, |c| c.id),
            nome: novo.nome,
            cpf: novo.cpf,
            telefone: novo.telefone,
            ativo: true,
        };
        clientes.push(cliente.clone());
        Ok(cliente)
    }

    async fn update(&self, id: i32, dados: NovoCliente) -> AppResult<Option<Cliente>> {
        let mut clientes = self.db.clientes.write().await;
        if clientes.iter().any(|c| c.id != id && c.cpf == dados.cpf) {
            return Err(AppError::Conflict(ERRO_CPF_DUPLICADO.to_string()));
        }

        match clientes.iter_mut().find(|c| c.id == id) {
            Some(cliente) => {
                cliente.nome = dados.nome;
                cliente.cpf = dados.cpf;
                cliente.telefone = dados.telefone;
                Ok(Some(cliente.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let mut clientes = self.db.clientes.write().await;
        match clientes.iter_mut().find(|c| c.id == id) {
            Some(cliente) => {
                cliente.ativo = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemCarroRepository {
    db: Arc<MemoryDb>,
}

impl MemCarroRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarroRepository for MemCarroRepository {
    async fn list_active(&self) -> AppResult<Vec<Carro>> {
        let carros = self.db.carros.read().await;
        Ok(carros.iter().filter(|c| c.ativo).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Carro>> {
        let carros = self.db.carros.read().await;
        Ok(carros.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, novo: NovoCarro) -> AppResult<Carro> {
        let mut carros = self.db.carros.write().await;
        let carro = Carro {
            id: proximo_id(&carros, |c| c.id),
            marca: novo.marca,
            modelo: novo.modelo,
            ano: novo.ano,
            cor: novo.cor,
            ativo: true,
        };
        carros.push(carro.clone());
        Ok(carro)
    }

    async fn update(&self, id: i32, dados: NovoCarro) -> AppResult<Option<Carro>> {
        let mut carros = self.db.carros.write().await;
        match carros.iter_mut().find(|c| c.id == id) {
            Some(carro) => {
                carro.marca = dados.marca;
                carro.modelo = dados.modelo;
                carro.ano = dados.ano;
                carro.cor = dados.cor;
                Ok(Some(carro.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let mut carros = self.db.carros.write().await;
        match carros.iter_mut().find(|c| c.id == id) {
            Some(carro) => {
                carro.ativo = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemPedidoRepository {
    db: Arc<MemoryDb>,
}

impl MemPedidoRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    // Join em memória com clientes e carros; None se alguma ponta sumiu
    async fn montar_detalhe(&self, pedido: &Pedido) -> Option<PedidoDetalhe> {
        let clientes = self.db.clientes.read().await;
        let carros = self.db.carros.read().await;

        let cliente = clientes.iter().find(|c| c.id == pedido.cliente_id)?;
        let carro = carros.iter().find(|c| c.id == pedido.carro_id)?;

        Some(PedidoDetalhe {
            id: pedido.id,
            cliente_id: pedido.cliente_id,
            nome_cliente: cliente.nome.clone(),
            carro_id: pedido.carro_id,
            marca_carro: carro.marca.clone(),
            modelo_carro: carro.modelo.clone(),
            data_pedido: pedido.data_pedido,
            valor_pedido: pedido.valor_pedido,
            ativo: pedido.ativo,
        })
    }

    async fn referencias_existem(&self, cliente_id: i32, carro_id: i32) -> bool {
        let clientes = self.db.clientes.read().await;
        let carros = self.db.carros.read().await;

        clientes.iter().any(|c| c.id == cliente_id) && carros.iter().any(|c| c.id == carro_id)
    }
}

#[async_trait]
impl PedidoRepository for MemPedidoRepository {
    async fn list_active(&self) -> AppResult<Vec<PedidoDetalhe>> {
        let pedidos: Vec<Pedido> = {
            let guarda = self.db.pedidos.read().await;
            guarda.iter().filter(|p| p.ativo).cloned().collect()
        };

        let mut detalhes = Vec::with_capacity(pedidos.len());
        for pedido in &pedidos {
            if let Some(detalhe) = self.montar_detalhe(pedido).await {
                detalhes.push(detalhe);
            }
        }
        Ok(detalhes)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PedidoDetalhe>> {
        let pedido = {
            let guarda = self.db.pedidos.read().await;
            guarda.iter().find(|p| p.id == id).cloned()
        };

        match pedido {
            Some(pedido) => Ok(self.montar_detalhe(&pedido).await),
            None => Ok(None),
        }
    }

    async fn create(&self, novo: NovoPedido) -> AppResult<PedidoDetalhe> {
        if !self.referencias_existem(novo.cliente_id, novo.carro_id).await {
            return Err(AppError::BadRequest(ERRO_FK_PEDIDO.to_string()));
        }

        let pedido = {
            let mut pedidos = self.db.pedidos.write().await;
            let pedido = Pedido {
                id: proximo_id(&pedidos, |p| p.id),
                cliente_id: novo.cliente_id,
                carro_id: novo.carro_id,
                data_pedido: novo.data_pedido,
                valor_pedido: novo.valor_pedido,
                ativo: true,
            };
            pedidos.push(pedido.clone());
            pedido
        };

        self.montar_detalhe(&pedido)
            .await
            .ok_or_else(|| AppError::NotFound("Pedido não encontrado".to_string()))
    }

    async fn update(&self, id: i32, dados: NovoPedido) -> AppResult<Option<PedidoDetalhe>> {
        if !self.referencias_existem(dados.cliente_id, dados.carro_id).await {
            return Err(AppError::BadRequest(ERRO_FK_PEDIDO.to_string()));
        }

        let pedido = {
            let mut pedidos = self.db.pedidos.write().await;
            match pedidos.iter_mut().find(|p| p.id == id) {
                Some(pedido) => {
                    pedido.cliente_id = dados.cliente_id;
                    pedido.carro_id = dados.carro_id;
                    pedido.data_pedido = dados.data_pedido;
                    pedido.valor_pedido = dados.valor_pedido;
                    Some(pedido.clone())
                }
                None => None,
            }
        };

        match pedido {
            Some(pedido) => Ok(self.montar_detalhe(&pedido).await),
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let mut pedidos = self.db.pedidos.write().await;
        match pedidos.iter_mut().find(|p| p.id == id) {
            Some(pedido) => {
                pedido.ativo = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn novo_cliente(nome: &str, cpf: &str) -> NovoCliente {
        NovoCliente {
            nome: nome.to_string(),
            cpf: cpf.to_string(),
            telefone: "11999999999".to_string(),
        }
    }

    fn novo_carro() -> NovoCarro {
        NovoCarro {
            marca: "FIAT".to_string(),
            modelo: "UNO".to_string(),
            ano: 2012,
            cor: "PRATA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_soft_delete_sai_da_listagem_mas_nao_da_consulta_por_id() {
        let db = MemoryDb::new();
        let repo = MemCarroRepository::new(db);

        let carro = repo.create(novo_carro()).await.unwrap();
        assert!(repo.soft_delete(carro.id).await.unwrap());

        assert!(repo.list_active().await.unwrap().is_empty());

        let consultado = repo.find_by_id(carro.id).await.unwrap().unwrap();
        assert!(!consultado.ativo);
    }

    #[tokio::test]
    async fn test_update_de_id_inexistente_nao_cria_registro() {
        let db = MemoryDb::new();
        let repo = MemCarroRepository::new(db);

        let resultado = repo.update(999, novo_carro()).await.unwrap();
        assert!(resultado.is_none());
        assert!(repo.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cpf_duplicado_gera_conflito() {
        let db = MemoryDb::new();
        let repo = MemClienteRepository::new(db);

        repo.create(novo_cliente("ANA", "11122233344")).await.unwrap();
        let erro = repo.create(novo_cliente("BIA", "11122233344")).await;

        assert!(matches!(erro, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_pedido_exige_cliente_e_carro_existentes() {
        let db = MemoryDb::new();
        let repo = MemPedidoRepository::new(db);

        let novo = NovoPedido {
            cliente_id: 1,
            carro_id: 1,
            data_pedido: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            valor_pedido: Decimal::new(150050, 2),
        };

        assert!(matches!(
            repo.create(novo).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_pedido_traz_dados_denormalizados() {
        let db = MemoryDb::new();
        let clientes = MemClienteRepository::new(db.clone());
        let carros = MemCarroRepository::new(db.clone());
        let pedidos = MemPedidoRepository::new(db);

        let cliente = clientes.create(novo_cliente("ANA", "11122233344")).await.unwrap();
        let carro = carros.create(novo_carro()).await.unwrap();

        let pedido = pedidos
            .create(NovoPedido {
                cliente_id: cliente.id,
                carro_id: carro.id,
                data_pedido: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                valor_pedido: Decimal::new(150050, 2),
            })
            .await
            .unwrap();

        assert_eq!(pedido.nome_cliente, "ANA");
        assert_eq!(pedido.marca_carro, "FIAT");
        assert_eq!(pedido.modelo_carro, "UNO");
        assert_eq!(pedido.valor_pedido, Decimal::new(150050, 2));
    }
}
