//! Outbound mail transport configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP mail relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Base URL of the mail relay API
    pub api_url: String,

    /// API key for the relay
    pub api_key: String,

    /// Sender address placed in the From header
    pub from_address: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("http://localhost:8025/api/send"),
            api_key: String::new(),
            from_address: String::from("noreply@farmkeep.local"),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let api_url = std::env::var("MAIL_API_URL")
            .unwrap_or_else(|_| "http://localhost:8025/api/send".to_string());
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let from_address = std::env::var("MAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "noreply@farmkeep.local".to_string());
        let request_timeout_secs = std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout);

        Self {
            api_url,
            api_key,
            from_address,
            request_timeout_secs,
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}
