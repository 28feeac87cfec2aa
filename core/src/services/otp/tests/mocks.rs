//! Test doubles for the OTP engine tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::services::otp::traits::Mailer;

/// A delivered message captured by the capturing mailer
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that records every message and can simulate transport failure
#[derive(Clone, Default)]
pub struct CapturingMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    fail: Arc<AtomicBool>,
}

impl CapturingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Extract the 6-digit code from the last delivered message body
    pub async fn last_code(&self) -> Option<String> {
        let sent = self.sent.lock().await;
        let body = &sent.last()?.body;
        body.split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == 6)
            .map(|s| s.to_string())
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("smtp relay unreachable".to_string());
        }
        let mut sent = self.sent.lock().await;
        sent.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(format!("mock-{}", sent.len()))
    }
}
