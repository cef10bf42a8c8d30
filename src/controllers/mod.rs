//! Controllers dos recursos
//!
//! Cada controller valida a entrada, normaliza os campos e delega ao
//! repositório correspondente.

pub mod carro_controller;
pub mod cliente_controller;
pub mod pedido_controller;
