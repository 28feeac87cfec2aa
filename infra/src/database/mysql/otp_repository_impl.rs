//! MySQL implementation of the OtpRepository trait.
//!
//! The table stores only code digests. `replace_active` runs its delete
//! and insert in one transaction so concurrent issuances cannot leave two
//! unused records for the same (user, email) pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::email_otp::EmailOtp;
use fk_core::errors::DomainError;
use fk_core::repositories::OtpRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &sqlx::mysql::MySqlRow) -> Result<EmailOtp, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("Failed to get user_id", e))?;

        Ok(EmailOtp {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            code_hash: row
                .try_get("code_hash")
                .map_err(|e| db_error("Failed to get code_hash", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("Failed to get expires_at", e))?,
            attempts_left: row
                .try_get("attempts_left")
                .map_err(|e| db_error("Failed to get attempts_left", e))?,
            used: row
                .try_get("used")
                .map_err(|e| db_error("Failed to get used", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn replace_active(&self, record: EmailOtp) -> Result<EmailOtp, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM email_otps WHERE user_id = ? AND email = ? AND used = FALSE")
            .bind(record.user_id.to_string())
            .bind(&record.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete superseded codes", e))?;

        let insert = r#"
            INSERT INTO email_otps (
                id, user_id, email, code_hash, expires_at,
                attempts_left, used, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(insert)
            .bind(record.id.to_string())
            .bind(record.user_id.to_string())
            .bind(&record.email)
            .bind(&record.code_hash)
            .bind(record.expires_at)
            .bind(record.attempts_left)
            .bind(record.used)
            .bind(record.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to insert verification code", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(record)
    }

    async fn find_active(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<Option<EmailOtp>, DomainError> {
        let query = r#"
            SELECT id, user_id, email, code_hash, expires_at,
                   attempts_left, used, created_at
            FROM email_otps
            WHERE user_id = ? AND email = ? AND used = FALSE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_otp(&row)?)),
            None => Ok(None),
        }
    }

    async fn decrement_attempts(&self, id: Uuid) -> Result<i32, DomainError> {
        sqlx::query(
            "UPDATE email_otps SET attempts_left = GREATEST(attempts_left - 1, 0) WHERE id = ?",
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to decrement attempts", e))?;

        let row = sqlx::query("SELECT attempts_left FROM email_otps WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?
            .ok_or_else(|| DomainError::not_found("Verification code"))?;

        row.try_get("attempts_left")
            .map_err(|e| db_error("Failed to get attempts_left", e))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE email_otps SET used = TRUE WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to mark code used", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Verification code"));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM email_otps WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete verification code", e))?;
        Ok(())
    }
}
