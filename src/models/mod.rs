//! Modelos do sistema
//!
//! Este módulo contém os structs que mapeiam as tabelas do PostgreSQL
//! e os dados já validados usados em INSERT/UPDATE.

pub mod carro;
pub mod cliente;
pub mod pedido;
