//! Animal entity: livestock registered to a farm.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// Health classification for an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Sick,
    Critical,
}

impl Default for HealthStatus {
    fn default() -> Self {
        HealthStatus::Good
    }
}

/// An animal registered to a farm; `tag_id` is globally unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Unique identifier
    pub id: Uuid,

    /// Farm this animal belongs to
    pub farm_id: Uuid,

    /// Owner resolved through `farm.owner`, hydrated by the repository
    pub owner_id: Uuid,

    /// Species (e.g. Cow, Sheep, Chicken)
    pub species: String,

    /// Unique ear-tag or similar identifier
    pub tag_id: String,

    /// Birth date, if known
    pub birth_date: Option<NaiveDate>,

    /// Health classification
    pub health_status: HealthStatus,
}

impl Animal {
    /// Creates a new animal on a farm
    pub fn new(farm_id: Uuid, owner_id: Uuid, species: String, tag_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            farm_id,
            owner_id,
            species,
            tag_id,
            birth_date: None,
            health_status: HealthStatus::Good,
        }
    }
}

impl Owned for Animal {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl HealthStatus {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Sick => "sick",
            HealthStatus::Critical => "critical",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "good" => Some(HealthStatus::Good),
            "sick" => Some(HealthStatus::Sick),
            "critical" => Some(HealthStatus::Critical),
            _ => None,
        }
    }
}
