//! OTP repository trait defining the interface for verification-code
//! persistence.
//!
//! The store holds only code digests, never raw codes. The supersede
//! operation is atomic so two concurrent issuances cannot leave two
//! unused records for the same (user, email) pair.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::email_otp::EmailOtp;
use crate::errors::DomainError;

/// Repository trait for EmailOtp persistence operations
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Atomically delete every unused record for `(record.user_id,
    /// record.email)` and insert `record` as the sole unused one.
    ///
    /// Implementations backed by a transactional store must run both
    /// steps in a single transaction.
    async fn replace_active(&self, record: EmailOtp) -> Result<EmailOtp, DomainError>;

    /// The most recently created unused record for the pair, if any
    async fn find_active(&self, user_id: Uuid, email: &str) -> Result<Option<EmailOtp>, DomainError>;

    /// Decrement `attempts_left` (floor 0) and return the new value
    async fn decrement_attempts(&self, id: Uuid) -> Result<i32, DomainError>;

    /// Mark a record used; the record is terminal afterwards
    async fn mark_used(&self, id: Uuid) -> Result<(), DomainError>;

    /// Physically delete a record (issuance rollback path)
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
