//! # FarmKeep Infrastructure
//!
//! Concrete implementations of the repository and mail seams defined in
//! `fk_core`: MySQL persistence via sqlx and outbound mail transports.

pub mod database;
pub mod mail;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mail transport error: {0}")]
    Mail(String),
}

pub use database::connection::DatabasePool;
pub use mail::{HttpRelayMailer, MockMailer};
