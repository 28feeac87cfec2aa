//! Farm entity, the root of the ownership chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// A farm owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    /// Unique identifier
    pub id: Uuid,

    /// Owning user
    pub owner_id: Uuid,

    /// Display name
    pub name: String,

    /// Free-form location description
    pub location: String,

    /// Farm size in hectares
    pub size_hectares: Option<f64>,

    /// Timestamp when the farm was created
    pub created_at: DateTime<Utc>,
}

impl Farm {
    /// Creates a new farm for an owner
    pub fn new(owner_id: Uuid, name: String, location: String, size_hectares: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            location,
            size_hectares,
            created_at: Utc::now(),
        }
    }
}

impl Owned for Farm {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}
