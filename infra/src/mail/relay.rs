//! HTTP mail relay client.
//!
//! Sends plain-text mail through a JSON relay API (Mailgun-style: POST a
//! message body, authenticate with a bearer key, read the message id out
//! of the response).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use fk_core::services::otp::Mailer;
use fk_shared::config::MailConfig;
use fk_shared::utils::email::mask_email;

/// Mail transport backed by an HTTP relay API
pub struct HttpRelayMailer {
    client: reqwest::Client,
    config: MailConfig,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default)]
    id: Option<String>,
}

impl HttpRelayMailer {
    /// Create a new relay mailer from configuration
    pub fn new(config: MailConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        let request = RelayRequest {
            from: &self.config.from_address,
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Mail relay request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                to = %mask_email(to),
                status = %status,
                "Mail relay rejected message"
            );
            return Err(format!("Mail relay returned {}: {}", status, detail));
        }

        let message_id = response
            .json::<RelayResponse>()
            .await
            .ok()
            .and_then(|r| r.id)
            .unwrap_or_else(|| format!("relay_{}", uuid::Uuid::new_v4()));

        tracing::info!(
            target: "mail",
            to = %mask_email(to),
            message_id = %message_id,
            "Mail accepted by relay"
        );

        Ok(message_id)
    }
}
