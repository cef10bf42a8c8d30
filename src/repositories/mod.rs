//! Repositórios de persistência
//!
//! Um trait por recurso, com a implementação padrão sobre o PostgreSQL e
//! uma variante em memória usada pelos testes.

pub mod carro_repository;
pub mod cliente_repository;
pub mod memory;
pub mod pedido_repository;
