//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::user::User;
use fk_core::errors::DomainError;
use fk_core::repositories::UserRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;

        Ok(User {
            id: parse_uuid(&id)?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("Failed to get password_hash", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_error("Failed to get is_active", e))?,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| db_error("Failed to get email_verified", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, is_active, email_verified,
                   created_at, updated_at
            FROM users
            WHERE email = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, is_active, email_verified,
                   created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) as count FROM users WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_error("Failed to get count", e))?;
        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.exists_by_email(&user.email).await? {
            return Err(DomainError::validation("Email already registered"));
        }

        let query = r#"
            INSERT INTO users (
                id, email, password_hash, is_active, email_verified,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.email_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create user", e))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                email = ?,
                password_hash = ?,
                is_active = ?,
                email_verified = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.email_verified)
            .bind(now)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        let mut updated = user;
        updated.updated_at = now;
        Ok(updated)
    }
}
