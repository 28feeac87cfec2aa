//! Configuration for the OTP engine

use crate::domain::entities::email_otp::{DEFAULT_TTL_MINUTES, MAX_ATTEMPTS};

/// Configuration injected into the OTP engine at construction
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub ttl_minutes: i64,

    /// Verification attempts allowed per issued code
    pub max_attempts: i32,

    /// Subject line of the verification email
    pub mail_subject: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            mail_subject: String::from("Your verification code"),
        }
    }
}

impl OtpConfig {
    /// Set the code lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Set the attempt budget per code
    pub fn with_max_attempts(mut self, attempts: i32) -> Self {
        self.max_attempts = attempts;
        self
    }
}
