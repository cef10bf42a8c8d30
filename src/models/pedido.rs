//! Modelo de Pedido de venda
//!
//! Um pedido referencia um cliente e um carro. As chaves estrangeiras são
//! garantidas pelo banco; a aplicação só traduz a violação para uma resposta
//! amigável.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct Pedido {
    pub id: i32,
    pub cliente_id: i32,
    pub carro_id: i32,
    pub data_pedido: NaiveDate,
    pub valor_pedido: Decimal,
    pub ativo: bool,
}

/// Pedido com os dados denormalizados do cliente e do carro,
/// usado nas listagens e na consulta por id
#[derive(Debug, Clone, FromRow)]
pub struct PedidoDetalhe {
    pub id: i32,
    pub cliente_id: i32,
    pub nome_cliente: String,
    pub carro_id: i32,
    pub marca_carro: String,
    pub modelo_carro: String,
    pub data_pedido: NaiveDate,
    pub valor_pedido: Decimal,
    pub ativo: bool,
}

/// Dados de pedido já validados: data convertida e valor normalizado
#[derive(Debug, Clone)]
pub struct NovoPedido {
    pub cliente_id: i32,
    pub carro_id: i32,
    pub data_pedido: NaiveDate,
    pub valor_pedido: Decimal,
}
