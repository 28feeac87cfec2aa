//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::email_otp::EmailOtp;
use crate::errors::DomainError;

use super::repository::OtpRepository;

/// In-memory OTP store for tests and development
#[derive(Clone)]
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<Uuid, EmailOtp>>>,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetch a record by id without going through the trait
    pub async fn get(&self, id: Uuid) -> Option<EmailOtp> {
        self.records.read().await.get(&id).cloned()
    }

    /// Count unused records for a (user, email) pair
    pub async fn count_active(&self, user_id: Uuid, email: &str) -> usize {
        self.records
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id && r.email == email && !r.used)
            .count()
    }

    /// Total number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Insert a record directly, bypassing the supersede semantics
    pub async fn insert_raw(&self, record: EmailOtp) {
        self.records.write().await.insert(record.id, record);
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn replace_active(&self, record: EmailOtp) -> Result<EmailOtp, DomainError> {
        let mut records = self.records.write().await;
        records.retain(|_, r| !(r.user_id == record.user_id && r.email == record.email && !r.used));
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_active(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<Option<EmailOtp>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && r.email == email && !r.used)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn decrement_attempts(&self, id: Uuid) -> Result<i32, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("EmailOtp"))?;
        record.attempts_left = (record.attempts_left - 1).max(0);
        Ok(record.attempts_left)
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("EmailOtp"))?;
        record.used = true;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.records.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: Uuid, email: &str) -> EmailOtp {
        EmailOtp::new(user_id, email.to_string(), "0".repeat(64), 10)
    }

    #[tokio::test]
    async fn test_replace_active_supersedes_unused() {
        let repo = MockOtpRepository::new();
        let user_id = Uuid::new_v4();

        repo.replace_active(record(user_id, "a@example.com"))
            .await
            .unwrap();
        repo.replace_active(record(user_id, "a@example.com"))
            .await
            .unwrap();

        assert_eq!(repo.count_active(user_id, "a@example.com").await, 1);
    }

    #[tokio::test]
    async fn test_replace_active_keeps_used_records() {
        let repo = MockOtpRepository::new();
        let user_id = Uuid::new_v4();

        let first = repo
            .replace_active(record(user_id, "a@example.com"))
            .await
            .unwrap();
        repo.mark_used(first.id).await.unwrap();

        repo.replace_active(record(user_id, "a@example.com"))
            .await
            .unwrap();

        // The used record survives as history; one unused record is live.
        assert_eq!(repo.len().await, 2);
        assert_eq!(repo.count_active(user_id, "a@example.com").await, 1);
    }

    #[tokio::test]
    async fn test_decrement_floors_at_zero() {
        let repo = MockOtpRepository::new();
        let user_id = Uuid::new_v4();
        let otp = repo
            .replace_active(record(user_id, "a@example.com").with_attempts(1))
            .await
            .unwrap();

        assert_eq!(repo.decrement_attempts(otp.id).await.unwrap(), 0);
        assert_eq!(repo.decrement_attempts(otp.id).await.unwrap(), 0);
    }
}
