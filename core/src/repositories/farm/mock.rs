//! In-memory implementation of the farm-domain repositories for testing.
//!
//! One store implements all six traits so a test can wire a complete
//! farm graph without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{ActivityLog, Animal, Crop, Farm, Field, UserProfile};
use crate::errors::DomainError;

use super::repository::{
    ActivityRepository, AnimalRepository, CropRepository, FarmRepository, FieldRepository,
    ProfileRepository,
};

/// In-memory farm-domain store for tests and development
#[derive(Clone, Default)]
pub struct MockFarmStore {
    farms: Arc<RwLock<HashMap<Uuid, Farm>>>,
    fields: Arc<RwLock<HashMap<Uuid, Field>>>,
    crops: Arc<RwLock<HashMap<Uuid, Crop>>>,
    animals: Arc<RwLock<HashMap<Uuid, Animal>>>,
    activities: Arc<RwLock<HashMap<Uuid, ActivityLog>>>,
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl MockFarmStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FarmRepository for MockFarmStore {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Farm>, DomainError> {
        let farms = self.farms.read().await;
        let mut owned: Vec<Farm> = farms
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Farm>, DomainError> {
        let farms = self.farms.read().await;
        Ok(farms.get(&id).filter(|f| f.owner_id == owner_id).cloned())
    }

    async fn create(&self, farm: Farm) -> Result<Farm, DomainError> {
        self.farms.write().await.insert(farm.id, farm.clone());
        Ok(farm)
    }

    async fn update(&self, farm: Farm) -> Result<Farm, DomainError> {
        let mut farms = self.farms.write().await;
        if !farms.contains_key(&farm.id) {
            return Err(DomainError::not_found("Farm"));
        }
        farms.insert(farm.id, farm.clone());
        Ok(farm)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut farms = self.farms.write().await;
        let removable = farms.get(&id).map(|f| f.owner_id == owner_id) == Some(true);
        if removable {
            farms.remove(&id);
        }
        Ok(removable)
    }
}

#[async_trait]
impl FieldRepository for MockFarmStore {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Field>, DomainError> {
        let fields = self.fields.read().await;
        Ok(fields
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Field>, DomainError> {
        let fields = self.fields.read().await;
        Ok(fields.get(&id).filter(|f| f.owner_id == owner_id).cloned())
    }

    async fn create(&self, field: Field) -> Result<Field, DomainError> {
        let mut fields = self.fields.write().await;
        if fields
            .values()
            .any(|f| f.farm_id == field.farm_id && f.name == field.name)
        {
            return Err(DomainError::validation(
                "Field name already used within this farm",
            ));
        }
        fields.insert(field.id, field.clone());
        Ok(field)
    }

    async fn update(&self, field: Field) -> Result<Field, DomainError> {
        let mut fields = self.fields.write().await;
        if !fields.contains_key(&field.id) {
            return Err(DomainError::not_found("Field"));
        }
        fields.insert(field.id, field.clone());
        Ok(field)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut fields = self.fields.write().await;
        let removable = fields.get(&id).map(|f| f.owner_id == owner_id) == Some(true);
        if removable {
            fields.remove(&id);
        }
        Ok(removable)
    }
}

#[async_trait]
impl CropRepository for MockFarmStore {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Crop>, DomainError> {
        let crops = self.crops.read().await;
        Ok(crops
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Crop>, DomainError> {
        let crops = self.crops.read().await;
        Ok(crops.get(&id).filter(|c| c.owner_id == owner_id).cloned())
    }

    async fn create(&self, crop: Crop) -> Result<Crop, DomainError> {
        self.crops.write().await.insert(crop.id, crop.clone());
        Ok(crop)
    }

    async fn update(&self, crop: Crop) -> Result<Crop, DomainError> {
        let mut crops = self.crops.write().await;
        if !crops.contains_key(&crop.id) {
            return Err(DomainError::not_found("Crop"));
        }
        crops.insert(crop.id, crop.clone());
        Ok(crop)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut crops = self.crops.write().await;
        let removable = crops.get(&id).map(|c| c.owner_id == owner_id) == Some(true);
        if removable {
            crops.remove(&id);
        }
        Ok(removable)
    }
}

#[async_trait]
impl AnimalRepository for MockFarmStore {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Animal>, DomainError> {
        let animals = self.animals.read().await;
        Ok(animals
            .values()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Animal>, DomainError> {
        let animals = self.animals.read().await;
        Ok(animals.get(&id).filter(|a| a.owner_id == owner_id).cloned())
    }

    async fn create(&self, animal: Animal) -> Result<Animal, DomainError> {
        let mut animals = self.animals.write().await;
        if animals.values().any(|a| a.tag_id == animal.tag_id) {
            return Err(DomainError::validation("Tag id already registered"));
        }
        animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    async fn update(&self, animal: Animal) -> Result<Animal, DomainError> {
        let mut animals = self.animals.write().await;
        if !animals.contains_key(&animal.id) {
            return Err(DomainError::not_found("Animal"));
        }
        animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut animals = self.animals.write().await;
        let removable = animals.get(&id).map(|a| a.owner_id == owner_id) == Some(true);
        if removable {
            animals.remove(&id);
        }
        Ok(removable)
    }
}

#[async_trait]
impl ActivityRepository for MockFarmStore {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<ActivityLog>, DomainError> {
        let activities = self.activities.read().await;
        let mut owned: Vec<ActivityLog> = activities
            .values()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(owned)
    }

    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<ActivityLog>, DomainError> {
        let activities = self.activities.read().await;
        Ok(activities
            .get(&id)
            .filter(|a| a.owner_id == owner_id)
            .cloned())
    }

    async fn create(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError> {
        self.activities
            .write()
            .await
            .insert(activity.id, activity.clone());
        Ok(activity)
    }

    async fn update(&self, activity: ActivityLog) -> Result<ActivityLog, DomainError> {
        let mut activities = self.activities.write().await;
        if !activities.contains_key(&activity.id) {
            return Err(DomainError::not_found("ActivityLog"));
        }
        activities.insert(activity.id, activity.clone());
        Ok(activity)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut activities = self.activities.write().await;
        let removable = activities.get(&id).map(|a| a.owner_id == owner_id) == Some(true);
        if removable {
            activities.remove(&id);
        }
        Ok(removable)
    }
}

#[async_trait]
impl ProfileRepository for MockFarmStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SoilType;

    #[tokio::test]
    async fn test_owner_scoping_hides_foreign_farms() {
        let store = MockFarmStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let farm = FarmRepository::create(
            &store,
            Farm::new(alice, "North".to_string(), String::new(), None),
        )
        .await
        .unwrap();

        assert!(FarmRepository::find_for_owner(&store, farm.id, bob)
            .await
            .unwrap()
            .is_none());
        assert!(FarmRepository::list_for_owner(&store, bob)
            .await
            .unwrap()
            .is_empty());
        // Cross-owner delete is a no-op
        assert!(!FarmRepository::delete(&store, farm.id, bob).await.unwrap());
        assert!(FarmRepository::find_for_owner(&store, farm.id, alice)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_field_name_unique_per_farm() {
        let store = MockFarmStore::new();
        let owner = Uuid::new_v4();
        let farm_id = Uuid::new_v4();

        let field = Field::new(farm_id, owner, "East".to_string(), 2.5, SoilType::Loam);
        FieldRepository::create(&store, field).await.unwrap();

        let duplicate = Field::new(farm_id, owner, "East".to_string(), 1.0, SoilType::Clay);
        assert!(FieldRepository::create(&store, duplicate).await.is_err());

        // Same name on another farm is fine
        let elsewhere = Field::new(Uuid::new_v4(), owner, "East".to_string(), 1.0, SoilType::Sand);
        assert!(FieldRepository::create(&store, elsewhere).await.is_ok());
    }
}
