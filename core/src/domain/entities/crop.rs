//! Crop entity: a planting cycle on a field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// Lifecycle status of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Planned,
    Growing,
    Harvested,
}

impl Default for CropStatus {
    fn default() -> Self {
        CropStatus::Planned
    }
}

/// A crop planted (or planned) on a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// Unique identifier
    pub id: Uuid,

    /// Field this crop grows on
    pub field_id: Uuid,

    /// Farm resolved through `field.farm`, hydrated by the repository
    pub farm_id: Uuid,

    /// Owner resolved through `field.farm.owner`, hydrated by the repository
    pub owner_id: Uuid,

    /// Crop name (e.g. "Winter wheat")
    pub name: String,

    /// Planting date
    pub plant_date: Option<NaiveDate>,

    /// Expected harvest date
    pub expected_harvest_date: Option<NaiveDate>,

    /// Lifecycle status
    pub status: CropStatus,
}

impl Crop {
    /// Creates a new planned crop on a field
    pub fn new(field_id: Uuid, farm_id: Uuid, owner_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            field_id,
            farm_id,
            owner_id,
            name,
            plant_date: None,
            expected_harvest_date: None,
            status: CropStatus::Planned,
        }
    }
}

impl Owned for Crop {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl CropStatus {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CropStatus::Planned => "planned",
            CropStatus::Growing => "growing",
            CropStatus::Harvested => "harvested",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(CropStatus::Planned),
            "growing" => Some(CropStatus::Growing),
            "harvested" => Some(CropStatus::Harvested),
            _ => None,
        }
    }
}
