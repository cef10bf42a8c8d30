use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::pedido::PedidoDetalhe;
use crate::utils::validation::validate_positive;

/// Valor do pedido como chega no JSON: número ou texto com vírgula
/// como separador decimal ("1500,50")
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValorPedido {
    Numero(f64),
    Texto(String),
}

impl ValorPedido {
    /// Normaliza para `Decimal` com duas casas. Em texto, apenas a primeira
    /// vírgula é trocada por ponto; o número resultante precisa ser finito
    /// e estritamente positivo.
    pub fn normalizar(&self) -> Option<Decimal> {
        let numero = match self {
            ValorPedido::Numero(n) => *n,
            ValorPedido::Texto(texto) => texto.trim().replacen(',', ".", 1).parse::<f64>().ok()?,
        };

        if !numero.is_finite() {
            return None;
        }
        validate_positive(numero).ok()?;

        Decimal::from_f64_retain(numero).map(|d| d.round_dp(2))
    }
}

// Corpo aceito em POST/PUT de pedidos
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidoRequest {
    pub cliente_id: Option<i32>,
    pub carro_id: Option<i32>,
    pub data_pedido: Option<String>,
    pub valor_pedido: Option<ValorPedido>,
}

// Response de pedido com os dados denormalizados para exibição
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidoResponse {
    pub id: i32,
    pub cliente_id: i32,
    pub nome_cliente: String,
    pub carro_id: i32,
    pub marca_carro: String,
    pub modelo_carro: String,
    pub data_pedido: NaiveDate,
    pub valor_pedido: f64,
    pub ativo: bool,
}

impl From<PedidoDetalhe> for PedidoResponse {
    fn from(pedido: PedidoDetalhe) -> Self {
        Self {
            id: pedido.id,
            cliente_id: pedido.cliente_id,
            nome_cliente: pedido.nome_cliente,
            carro_id: pedido.carro_id,
            marca_carro: pedido.marca_carro,
            modelo_carro: pedido.modelo_carro,
            data_pedido: pedido.data_pedido,
            valor_pedido: pedido.valor_pedido.to_f64().unwrap_or(0.0),
            ativo: pedido.ativo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizar_texto_com_virgula() {
        let valor = ValorPedido::Texto("1500,50".to_string());
        assert_eq!(valor.normalizar(), Some(Decimal::new(150050, 2)));
    }

    #[test]
    fn test_normalizar_numero() {
        let valor = ValorPedido::Numero(2500.0);
        assert_eq!(valor.normalizar(), Some(Decimal::new(2500, 0)));
    }

    #[test]
    fn test_normalizar_troca_apenas_a_primeira_virgula() {
        // "1.500,50" vira "1.500.50", que não é um número válido
        let valor = ValorPedido::Texto("1.500,50".to_string());
        assert_eq!(valor.normalizar(), None);
    }

    #[test]
    fn test_normalizar_rejeita_nao_numerico() {
        let valor = ValorPedido::Texto("caro demais".to_string());
        assert_eq!(valor.normalizar(), None);
    }

    #[test]
    fn test_normalizar_rejeita_nan_e_infinito() {
        assert_eq!(ValorPedido::Texto("NaN".to_string()).normalizar(), None);
        assert_eq!(ValorPedido::Texto("inf".to_string()).normalizar(), None);
    }

    #[test]
    fn test_normalizar_rejeita_zero_e_negativos() {
        assert_eq!(ValorPedido::Numero(0.0).normalizar(), None);
        assert_eq!(ValorPedido::Numero(-150.0).normalizar(), None);
        assert_eq!(ValorPedido::Texto("-10,00".to_string()).normalizar(), None);
    }
}
