//! Activity log entity: dated work performed on a farm.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// Kind of work recorded in an activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Watering,
    Fertilizing,
    Feeding,
    Harvesting,
    VetCheck,
    Other,
}

/// A dated activity on a farm, optionally linked to a field, crop, or
/// animal of the same farm. Cross-farm links are rejected at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Unique identifier
    pub id: Uuid,

    /// Farm the activity happened on
    pub farm_id: Uuid,

    /// Owner resolved through `farm.owner`, hydrated by the repository
    pub owner_id: Uuid,

    /// Date of the activity
    pub date: NaiveDate,

    /// Kind of work performed
    pub activity_type: ActivityType,

    /// Free-form description
    pub description: String,

    /// Optional link to a field of the same farm
    pub field_id: Option<Uuid>,

    /// Optional link to a crop of the same farm
    pub crop_id: Option<Uuid>,

    /// Optional link to an animal of the same farm
    pub animal_id: Option<Uuid>,

    /// User that recorded the entry
    pub created_by: Option<Uuid>,

    /// Timestamp when the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    /// Creates a new activity entry with no optional links
    pub fn new(
        farm_id: Uuid,
        owner_id: Uuid,
        date: NaiveDate,
        activity_type: ActivityType,
        description: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            farm_id,
            owner_id,
            date,
            activity_type,
            description,
            field_id: None,
            crop_id: None,
            animal_id: None,
            created_by: Some(owner_id),
            created_at: Utc::now(),
        }
    }
}

impl Owned for ActivityLog {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl ActivityType {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Watering => "watering",
            ActivityType::Fertilizing => "fertilizing",
            ActivityType::Feeding => "feeding",
            ActivityType::Harvesting => "harvesting",
            ActivityType::VetCheck => "vet_check",
            ActivityType::Other => "other",
        }
    }

    /// Parse from the database string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "watering" => Some(ActivityType::Watering),
            "fertilizing" => Some(ActivityType::Fertilizing),
            "feeding" => Some(ActivityType::Feeding),
            "harvesting" => Some(ActivityType::Harvesting),
            "vet_check" => Some(ActivityType::VetCheck),
            "other" => Some(ActivityType::Other),
            _ => None,
        }
    }
}
