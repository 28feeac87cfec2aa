//! Field entity: a named plot inside a farm.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// Soil classification for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Loam,
    Sand,
    Clay,
    Other,
}

impl Default for SoilType {
    fn default() -> Self {
        SoilType::Loam
    }
}

/// A plot of land belonging to a farm; name is unique per farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier
    pub id: Uuid,

    /// Farm this field belongs to
    pub farm_id: Uuid,

    /// Owner resolved through `farm.owner`, hydrated by the repository
    pub owner_id: Uuid,

    /// Display name, unique within the farm
    pub name: String,

    /// Field area in hectares
    pub area_hectares: f64,

    /// Soil classification
    pub soil_type: SoilType,
}

impl Field {
    /// Creates a new field inside a farm
    pub fn new(
        farm_id: Uuid,
        owner_id: Uuid,
        name: String,
        area_hectares: f64,
        soil_type: SoilType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            farm_id,
            owner_id,
            name,
            area_hectares,
            soil_type,
        }
    }
}

impl Owned for Field {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl SoilType {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loam => "loam",
            SoilType::Sand => "sand",
            SoilType::Clay => "clay",
            SoilType::Other => "other",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "loam" => Some(SoilType::Loam),
            "sand" => Some(SoilType::Sand),
            "clay" => Some(SoilType::Clay),
            "other" => Some(SoilType::Other),
            _ => None,
        }
    }
}
