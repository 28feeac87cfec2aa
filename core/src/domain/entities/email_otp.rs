//! One-time code record for email verification.
//!
//! Only the SHA-256 digest of the code is ever stored; the raw six digits
//! exist in memory just long enough to be mailed to the user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed per record
pub const MAX_ATTEMPTS: i32 = 5;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime for verification codes (10 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// One issued verification code, bound to a (user, email) pair.
///
/// At most one unused record exists per pair; creating a new one
/// supersedes all prior unused records. Once `used` is set the record is
/// terminal and no field is mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailOtp {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Target email address, normalized lowercase
    pub email: String,

    /// SHA-256 hex digest of the 6-digit code
    pub code_hash: String,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Remaining verification attempts, floor 0
    pub attempts_left: i32,

    /// Whether the record reached a terminal state
    pub used: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl EmailOtp {
    /// Creates a new unused record with the given code digest
    pub fn new(user_id: Uuid, email: String, code_hash: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            email,
            code_hash,
            expires_at: now + Duration::minutes(ttl_minutes),
            attempts_left: MAX_ATTEMPTS,
            used: false,
            created_at: now,
        }
    }

    /// Creates a record with a custom attempt budget
    pub fn with_attempts(mut self, attempts: i32) -> Self {
        self.attempts_left = attempts;
        self
    }

    /// Whether the code has passed its expiration timestamp
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Whether any verification attempts remain
    pub fn has_attempts(&self) -> bool {
        self.attempts_left > 0
    }
}
