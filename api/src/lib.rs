//! # FarmKeep API
//!
//! HTTP layer for the FarmKeep backend: request DTOs, JWT middleware,
//! route handlers, and the mapping from domain errors onto HTTP status
//! codes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
