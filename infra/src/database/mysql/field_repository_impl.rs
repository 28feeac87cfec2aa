//! MySQL implementation of the FieldRepository trait.
//!
//! Ownership is resolved through the `fields -> farms` join; `owner_id`
//! on the entity is hydrated from `farms.owner_id`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::{Field, SoilType};
use fk_core::errors::DomainError;
use fk_core::repositories::FieldRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of FieldRepository
pub struct MySqlFieldRepository {
    pool: MySqlPool,
}

impl MySqlFieldRepository {
    /// Create a new MySQL field repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_field(row: &sqlx::mysql::MySqlRow) -> Result<Field, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let farm_id: String = row
            .try_get("farm_id")
            .map_err(|e| db_error("Failed to get farm_id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_error("Failed to get owner_id", e))?;
        let soil_type: String = row
            .try_get("soil_type")
            .map_err(|e| db_error("Failed to get soil_type", e))?;

        Ok(Field {
            id: parse_uuid(&id)?,
            farm_id: parse_uuid(&farm_id)?,
            owner_id: parse_uuid(&owner_id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            area_hectares: row
                .try_get("area_hectares")
                .map_err(|e| db_error("Failed to get area_hectares", e))?,
            soil_type: SoilType::parse(&soil_type).ok_or_else(|| DomainError::Database {
                message: format!("Unknown soil type: {}", soil_type),
            })?,
        })
    }
}

#[async_trait]
impl FieldRepository for MySqlFieldRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Field>, DomainError> {
        let query = r#"
            SELECT f.id, f.farm_id, fa.owner_id, f.name, f.area_hectares, f.soil_type
            FROM fields f
            JOIN farms fa ON fa.id = f.farm_id
            WHERE fa.owner_id = ?
            ORDER BY f.name
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_field).collect()
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Field>, DomainError> {
        let query = r#"
            SELECT f.id, f.farm_id, fa.owner_id, f.name, f.area_hectares, f.soil_type
            FROM fields f
            JOIN farms fa ON fa.id = f.farm_id
            WHERE f.id = ? AND fa.owner_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_field(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, field: Field) -> Result<Field, DomainError> {
        let dup = sqlx::query("SELECT COUNT(*) as count FROM fields WHERE farm_id = ? AND name = ?")
            .bind(field.farm_id.to_string())
            .bind(&field.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;
        let count: i64 = dup
            .try_get("count")
            .map_err(|e| db_error("Failed to get count", e))?;
        if count > 0 {
            return Err(DomainError::validation(
                "Field name already used within this farm",
            ));
        }

        let query = r#"
            INSERT INTO fields (id, farm_id, name, area_hectares, soil_type)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(field.id.to_string())
            .bind(field.farm_id.to_string())
            .bind(&field.name)
            .bind(field.area_hectares)
            .bind(field.soil_type.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create field", e))?;

        Ok(field)
    }

    async fn update(&self, field: Field) -> Result<Field, DomainError> {
        let query = r#"
            UPDATE fields f
            JOIN farms fa ON fa.id = f.farm_id
            SET f.name = ?, f.area_hectares = ?, f.soil_type = ?
            WHERE f.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&field.name)
            .bind(field.area_hectares)
            .bind(field.soil_type.as_str())
            .bind(field.id.to_string())
            .bind(field.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update field", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Field"));
        }
        Ok(field)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE f FROM fields f
            JOIN farms fa ON fa.id = f.farm_id
            WHERE f.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete field", e))?;

        Ok(result.rows_affected() > 0)
    }
}
