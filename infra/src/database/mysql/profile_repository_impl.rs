//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::UserProfile;
use fk_core::errors::DomainError;
use fk_core::repositories::ProfileRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("Failed to get user_id", e))?;

        Ok(UserProfile {
            user_id: parse_uuid(&user_id)?,
            bio: row
                .try_get("bio")
                .map_err(|e| db_error("Failed to get bio", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("Failed to get phone", e))?,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let query = "SELECT user_id, bio, phone FROM user_profiles WHERE user_id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        let query = r#"
            INSERT INTO user_profiles (user_id, bio, phone)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE bio = VALUES(bio), phone = VALUES(phone)
        "#;

        sqlx::query(query)
            .bind(profile.user_id.to_string())
            .bind(&profile.bio)
            .bind(&profile.phone)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to upsert profile", e))?;

        Ok(profile)
    }
}
