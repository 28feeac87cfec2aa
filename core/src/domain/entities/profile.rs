//! User profile entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ownership::Owned;

/// Per-user profile details, one per account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user (also the primary key)
    pub user_id: Uuid,

    /// Short biography
    pub bio: String,

    /// Contact phone number
    pub phone: String,
}

impl UserProfile {
    /// Creates an empty profile for a user
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            bio: String::new(),
            phone: String::new(),
        }
    }
}

impl Owned for UserProfile {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
