//! Outbound mail seam for the OTP engine

use async_trait::async_trait;

/// Trait for mail transport integration
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a plain-text message to `to`. Returns a provider message
    /// id on success and a transport-level description on failure; the
    /// engine converts any failure into its own delivery error.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;
}
