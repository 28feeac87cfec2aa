//! MySQL implementation of the AnimalRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fk_core::domain::entities::{Animal, HealthStatus};
use fk_core::errors::DomainError;
use fk_core::repositories::AnimalRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of AnimalRepository
pub struct MySqlAnimalRepository {
    pool: MySqlPool,
}

impl MySqlAnimalRepository {
    /// Create a new MySQL animal repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_animal(row: &sqlx::mysql::MySqlRow) -> Result<Animal, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let farm_id: String = row
            .try_get("farm_id")
            .map_err(|e| db_error("Failed to get farm_id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| db_error("Failed to get owner_id", e))?;
        let health_status: String = row
            .try_get("health_status")
            .map_err(|e| db_error("Failed to get health_status", e))?;

        Ok(Animal {
            id: parse_uuid(&id)?,
            farm_id: parse_uuid(&farm_id)?,
            owner_id: parse_uuid(&owner_id)?,
            species: row
                .try_get("species")
                .map_err(|e| db_error("Failed to get species", e))?,
            tag_id: row
                .try_get("tag_id")
                .map_err(|e| db_error("Failed to get tag_id", e))?,
            birth_date: row
                .try_get::<Option<NaiveDate>, _>("birth_date")
                .map_err(|e| db_error("Failed to get birth_date", e))?,
            health_status: HealthStatus::parse(&health_status).ok_or_else(|| {
                DomainError::Database {
                    message: format!("Unknown health status: {}", health_status),
                }
            })?,
        })
    }
}

#[async_trait]
impl AnimalRepository for MySqlAnimalRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Animal>, DomainError> {
        let query = r#"
            SELECT a.id, a.farm_id, fa.owner_id, a.species, a.tag_id,
                   a.birth_date, a.health_status
            FROM animals a
            JOIN farms fa ON fa.id = a.farm_id
            WHERE fa.owner_id = ?
            ORDER BY a.tag_id
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        rows.iter().map(Self::row_to_animal).collect()
    }

    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Animal>, DomainError> {
        let query = r#"
            SELECT a.id, a.farm_id, fa.owner_id, a.species, a.tag_id,
                   a.birth_date, a.health_status
            FROM animals a
            JOIN farms fa ON fa.id = a.farm_id
            WHERE a.id = ? AND fa.owner_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_animal(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, animal: Animal) -> Result<Animal, DomainError> {
        let dup = sqlx::query("SELECT COUNT(*) as count FROM animals WHERE tag_id = ?")
            .bind(&animal.tag_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;
        let count: i64 = dup
            .try_get("count")
            .map_err(|e| db_error("Failed to get count", e))?;
        if count > 0 {
            return Err(DomainError::validation("Tag id already registered"));
        }

        let query = r#"
            INSERT INTO animals (id, farm_id, species, tag_id, birth_date, health_status)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(animal.id.to_string())
            .bind(animal.farm_id.to_string())
            .bind(&animal.species)
            .bind(&animal.tag_id)
            .bind(animal.birth_date)
            .bind(animal.health_status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create animal", e))?;

        Ok(animal)
    }

    async fn update(&self, animal: Animal) -> Result<Animal, DomainError> {
        let query = r#"
            UPDATE animals a
            JOIN farms fa ON fa.id = a.farm_id
            SET a.species = ?, a.tag_id = ?, a.birth_date = ?, a.health_status = ?
            WHERE a.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&animal.species)
            .bind(&animal.tag_id)
            .bind(animal.birth_date)
            .bind(animal.health_status.as_str())
            .bind(animal.id.to_string())
            .bind(animal.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update animal", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Animal"));
        }
        Ok(animal)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE a FROM animals a
            JOIN farms fa ON fa.id = a.farm_id
            WHERE a.id = ? AND fa.owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete animal", e))?;

        Ok(result.rows_affected() > 0)
    }
}
