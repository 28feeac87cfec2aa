//! Mock mail transport for development and testing.
//!
//! Logs messages instead of sending them and can simulate transport
//! failures.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use fk_core::services::otp::Mailer;
use fk_shared::utils::email::{is_valid_email, mask_email};

/// Mock mail transport that logs instead of sending
#[derive(Clone, Default)]
pub struct MockMailer {
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of messages accepted so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!(to = %mask_email(to), "Mock mailer simulating failure");
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            target: "mail",
            provider = "mock",
            to = %mask_email(to),
            subject = %subject,
            message_id = %message_id,
            count = count,
            body_len = body.len(),
            "Mock mail delivered"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mailer_counts_messages() {
        let mailer = MockMailer::new();

        let id = mailer
            .send("user@example.com", "Subject", "Body")
            .await
            .unwrap();

        assert!(id.starts_with("mock_"));
        assert_eq!(mailer.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_mailer_simulated_failure() {
        let mailer = MockMailer::new();
        mailer.set_simulate_failure(true);

        let result = mailer.send("user@example.com", "Subject", "Body").await;
        assert!(result.is_err());
        assert_eq!(mailer.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_mailer_rejects_invalid_address() {
        let mailer = MockMailer::new();
        assert!(mailer.send("not-an-email", "Subject", "Body").await.is_err());
    }
}
