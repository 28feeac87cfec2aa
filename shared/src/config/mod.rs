//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT configuration
//! - `database` - Database connection and pool configuration
//! - `mail` - Outbound mail transport configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod mail;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Mail transport configuration
    pub mail: MailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            mail: MailConfig::default(),
        }
    }
}
