//! MySQL implementation of the CropRepository trait.
//!
//! The ownership chain is two joins long: `crops -> fields -> farms`.
//! Both `farm_id` and `owner_id` on the entity are hydrated from the join.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::{Crop, CropStatus};
use fk_core::errors::DomainError;
use fk_core::repositories::CropRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of CropRepository
pub struct MySqlCropRepository {
    pool: MySqlPool,
}

impl MySqlCropRepository {
    /// Create a new MySQL crop repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_crop(row: &sqlx::mysql::MySqlRow) -> Result<Crop, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let field_id: String = row
            .try_get("field_id")
            .map_err(|e| db_error("Failed to get field_id", e))?;
        let farm_id: String = row
            .try_get("farm_id")
            .map_err(|e| db_error("Failed to get farm_id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_error("Failed to get owner_id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_error("Failed to get status", e))?;

        Ok(Crop {
            id: parse_uuid(&id)?,
            field_id: parse_uuid(&field_id)?,
            farm_id: parse_uuid(&farm_id)?,
            owner_id: parse_uuid(&owner_id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            plant_date: row
                .try_get::<Option<NaiveDate>, _>("plant_date")
                .map_err(|e| db_error("Failed to get plant_date", e))?,
            expected_harvest_date: row
                .try_get::<Option<NaiveDate>, _>("expected_harvest_date")
                .map_err(|e| db_error("Failed to get expected_harvest_date", e))?,
            status: CropStatus::parse(&status).ok_or_else(|| DomainError::Database {
                message: format!("Unknown crop status: {}", status),
            })?,
        })
    }
}

const SELECT_OWNED: &str = r#"
    SELECT c.id, c.field_id, f.farm_id, fa.owner_id, c.name,
           c.plant_date, c.expected_harvest_date, c.status
    FROM crops c
    JOIN fields f ON f.id = c.field_id
    JOIN farms fa ON fa.id = f.farm_id
"#;

#[async_trait]
impl CropRepository for MySqlCropRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Crop>, DomainError> {
        let query = format!("{} WHERE fa.owner_id = ? ORDER BY c.name", SELECT_OWNED);

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_crop).collect()
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Crop>, DomainError> {
        let query = format!("{} WHERE c.id = ? AND fa.owner_id = ? LIMIT 1", SELECT_OWNED);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_crop(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, crop: Crop) -> Result<Crop, DomainError> {
        let query = r#"
            INSERT INTO crops (id, field_id, name, plant_date, expected_harvest_date, status)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(crop.id.to_string())
            .bind(crop.field_id.to_string())
            .bind(&crop.name)
            .bind(crop.plant_date)
            .bind(crop.expected_harvest_date)
            .bind(crop.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create crop", e))?;

        Ok(crop)
    }

    async fn update(&self, crop: Crop) -> Result<Crop, DomainError> {
        let query = r#"
            UPDATE crops c
            JOIN fields f ON f.id = c.field_id
            JOIN farms fa ON fa.id = f.farm_id
            SET c.name = ?, c.plant_date = ?, c.expected_harvest_date = ?, c.status = ?
            WHERE c.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&crop.name)
            .bind(crop.plant_date)
            .bind(crop.expected_harvest_date)
            .bind(crop.status.as_str())
            .bind(crop.id.to_string())
            .bind(crop.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update crop", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Crop"));
        }
        Ok(crop)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE c FROM crops c
            JOIN fields f ON f.id = c.field_id
            JOIN farms fa ON fa.id = f.farm_id
            WHERE c.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete crop", e))?;

        Ok(result.rows_affected() > 0)
    }
}
