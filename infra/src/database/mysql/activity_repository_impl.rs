//! MySQL implementation of the ActivityRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::{ActivityLog, ActivityType};
use fk_core::errors::DomainError;
use fk_core::repositories::ActivityRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of ActivityRepository
pub struct MySqlActivityRepository {
    pool: MySqlPool,
}

impl MySqlActivityRepository {
    /// Create a new MySQL activity repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn optional_uuid(value: Option<String>) -> Result<Option<Uuid>, DomainError> {
        value.as_deref().map(parse_uuid).transpose()
    }

    fn row_to_activity(row: &sqlx::mysql::MySqlRow) -> Result<ActivityLog, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let farm_id: String = row
            .try_get("farm_id")
            .map_err(|e| db_error("Failed to get farm_id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_error("Failed to get owner_id", e))?;
        let activity_type: String = row
            .try_get("activity_type")
            .map_err(|e| db_error("Failed to get activity_type", e))?;
        let field_id: Option<String> = row
            .try_get("field_id")
            .map_err(|e| db_error("Failed to get field_id", e))?;
        let crop_id: Option<String> = row
            .try_get("crop_id")
            .map_err(|e| db_error("Failed to get crop_id", e))?;
        let animal_id: Option<String> = row
            .try_get("animal_id")
            .map_err(|e| db_error("Failed to get animal_id", e))?;
        let created_by: Option<String> = row
            .try_get("created_by")
            .map_err(|e| db_error("Failed to get created_by", e))?;

        Ok(ActivityLog {
            id: parse_uuid(&id)?,
            farm_id: parse_uuid(&farm_id)?,
            owner_id: parse_uuid(&owner_id)?,
            date: row
                .try_get::<NaiveDate, _>("date")
                .map_err(|e| db_error("Failed to get date", e))?,
            activity_type: ActivityType::parse(&activity_type).ok_or_else(|| {
                DomainError::Database {
                    message: format!("Unknown activity type: {}", activity_type),
                }
            })?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("Failed to get description", e))?,
            field_id: Self::optional_uuid(field_id)?,
            crop_id: Self::optional_uuid(crop_id)?,
            animal_id: Self::optional_uuid(animal_id)?,
            created_by: Self::optional_uuid(created_by)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

const SELECT_OWNED: &str = r#"
    SELECT al.id, al.farm_id, fa.owner_id, al.date, al.activity_type,
           al.description, al.field_id, al.crop_id, al.animal_id,
           al.created_by, al.created_at
    FROM activity_logs al
    JOIN farms fa ON fa.id = al.farm_id
"#;

#[async_trait]
impl ActivityRepository for MySqlActivityRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<ActivityLog>, DomainError> {
        let query = format!(
            "{} WHERE fa.owner_id = ? ORDER BY al.date DESC, al.created_at DESC",
            SELECT_OWNED
        );

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_activity).collect()
    }

    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<ActivityLog>, DomainError> {
        let query = format!("{} WHERE al.id = ? AND fa.owner_id = ? LIMIT 1", SELECT_OWNED);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_activity(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError> {
        let query = r#"
            INSERT INTO activity_logs (
                id, farm_id, date, activity_type, description,
                field_id, crop_id, animal_id, created_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(activity.id.to_string())
            .bind(activity.farm_id.to_string())
            .bind(activity.date)
            .bind(activity.activity_type.as_str())
            .bind(&activity.description)
            .bind(activity.field_id.map(|v| v.to_string()))
            .bind(activity.crop_id.map(|v| v.to_string()))
            .bind(activity.animal_id.map(|v| v.to_string()))
            .bind(activity.created_by.map(|v| v.to_string()))
            .bind(activity.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create activity entry", e))?;

        Ok(activity)
    }

    async fn update(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError> {
        let query = r#"
            UPDATE activity_logs al
            JOIN farms fa ON fa.id = al.farm_id
            SET al.date = ?, al.activity_type = ?, al.description = ?,
                al.field_id = ?, al.crop_id = ?, al.animal_id = ?
            WHERE al.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(activity.date)
            .bind(activity.activity_type.as_str())
            .bind(&activity.description)
            .bind(activity.field_id.map(|v| v.to_string()))
            .bind(activity.crop_id.map(|v| v.to_string()))
            .bind(activity.animal_id.map(|v| v.to_string()))
            .bind(activity.id.to_string())
            .bind(activity.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update activity entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Activity entry"));
        }
        Ok(activity)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE al FROM activity_logs al
            JOIN farms fa ON fa.id = al.farm_id
            WHERE al.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete activity entry", e))?;

        Ok(result.rows_affected() > 0)
    }
}
