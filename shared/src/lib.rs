//! Shared utilities and common types for the FarmKeep server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Utility functions (email normalization/validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, MailConfig, ServerConfig};
pub use types::{DetailResponse, ErrorBody};
pub use utils::email;
