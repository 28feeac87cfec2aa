//! MySQL implementation of the FarmRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::Farm;
use fk_core::errors::DomainError;
use fk_core::repositories::FarmRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of FarmRepository
pub struct MySqlFarmRepository {
    pool: MySqlPool,
}

impl MySqlFarmRepository {
    /// Create a new MySQL farm repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_farm(row: &sqlx::mysql::MySqlRow) -> Result<Farm, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_error("Failed to get owner_id", e))?;

        Ok(Farm {
            id: parse_uuid(&id)?,
            owner_id: parse_uuid(&owner_id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            location: row
                .try_get("location")
                .map_err(|e| db_error("Failed to get location", e))?,
            size_hectares: row
                .try_get("size_hectares")
                .map_err(|e| db_error("Failed to get size_hectares", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl FarmRepository for MySqlFarmRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Farm>, DomainError> {
        let query = r#"
            SELECT id, owner_id, name, location, size_hectares, created_at
            FROM farms
            WHERE owner_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_farm).collect()
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Farm>, DomainError> {
        let query = r#"
            SELECT id, owner_id, name, location, size_hectares, created_at
            FROM farms
            WHERE id = ? AND owner_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_farm(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, farm: Farm) -> Result<Farm, DomainError> {
        let query = r#"
            INSERT INTO farms (id, owner_id, name, location, size_hectares, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(farm.id.to_string())
            .bind(farm.owner_id.to_string())
            .bind(&farm.name)
            .bind(&farm.location)
            .bind(farm.size_hectares)
            .bind(farm.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create farm", e))?;

        Ok(farm)
    }

    async fn update(&self, farm: Farm) -> Result<Farm, DomainError> {
        let query = r#"
            UPDATE farms SET name = ?, location = ?, size_hectares = ?
            WHERE id = ? AND owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&farm.name)
            .bind(&farm.location)
            .bind(farm.size_hectares)
            .bind(farm.id.to_string())
            .bind(farm.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update farm", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Farm"));
        }
        Ok(farm)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM farms WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete farm", e))?;

        Ok(result.rows_affected() > 0)
    }
}
