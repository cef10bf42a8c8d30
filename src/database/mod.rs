//! Módulo de base de dados
//!
//! Maneja a conexão com o PostgreSQL e as migrações.

pub mod connection;

pub use connection::DatabaseConnection;
