//! Database connectivity and MySQL repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
