//! Repository traits for the farm domain.
//!
//! Every read is scoped by the transitive ownership chain rooted at the
//! authenticated user (`farm.owner`, `field.farm.owner`, and so on).
//! Implementations perform the chain walk in the query itself, so a record
//! belonging to another owner behaves exactly like a missing record.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{ActivityLog, Animal, Crop, Farm, Field, UserProfile};
use crate::errors::DomainError;

/// Persistence operations for farms (`farm.owner == user`)
#[async_trait]
pub trait FarmRepository: Send + Sync {
    /// All farms owned by the user, newest first
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Farm>, DomainError>;

    /// A single farm, only if owned by the user
    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Farm>, DomainError>;

    /// Persist a new farm
    async fn create(&self, farm: Farm) -> Result<Farm, DomainError>;

    /// Persist changes to an existing farm
    async fn update(&self, farm: Farm) -> Result<Farm, DomainError>;

    /// Delete a farm owned by the user; returns whether a row was removed
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}

/// Persistence operations for fields (`field.farm.owner == user`)
#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// All fields across the user's farms
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Field>, DomainError>;

    /// A single field, only if its farm is owned by the user
    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Field>, DomainError>;

    /// Persist a new field
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Name already used within the farm
    async fn create(&self, field: Field) -> Result<Field, DomainError>;

    /// Persist changes to an existing field
    async fn update(&self, field: Field) -> Result<Field, DomainError>;

    /// Delete a field whose farm is owned by the user
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}

/// Persistence operations for crops (`crop.field.farm.owner == user`)
#[async_trait]
pub trait CropRepository: Send + Sync {
    /// All crops across the user's fields
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Crop>, DomainError>;

    /// A single crop, only if its field's farm is owned by the user
    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Crop>, DomainError>;

    /// Persist a new crop
    async fn create(&self, crop: Crop) -> Result<Crop, DomainError>;

    /// Persist changes to an existing crop
    async fn update(&self, crop: Crop) -> Result<Crop, DomainError>;

    /// Delete a crop whose ownership chain ends at the user
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}

/// Persistence operations for animals (`animal.farm.owner == user`)
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// All animals across the user's farms
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Animal>, DomainError>;

    /// A single animal, only if its farm is owned by the user
    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Animal>, DomainError>;

    /// Persist a new animal
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Tag id already registered
    async fn create(&self, animal: Animal) -> Result<Animal, DomainError>;

    /// Persist changes to an existing animal
    async fn update(&self, animal: Animal) -> Result<Animal, DomainError>;

    /// Delete an animal whose farm is owned by the user
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}

/// Persistence operations for activity logs (`activity.farm.owner == user`)
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// All activity entries across the user's farms, newest date first
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<ActivityLog>, DomainError>;

    /// A single entry, only if its farm is owned by the user
    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<ActivityLog>, DomainError>;

    /// Persist a new activity entry
    async fn create(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError>;

    /// Persist changes to an existing entry
    async fn update(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError>;

    /// Delete an entry whose farm is owned by the user
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}

/// Persistence operations for user profiles (`profile.user == user`)
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The user's profile, if one exists
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError>;

    /// Create or update the user's profile
    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, DomainError>;
}
