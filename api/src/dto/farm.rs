//! Farm-domain endpoint DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::{ActivityType, CropStatus, HealthStatus, SoilType};

/// Request body for creating a farm
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFarmRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Location too long"))]
    #[serde(default)]
    pub location: String,

    pub size_hectares: Option<f64>,
}

/// Request body for updating a farm
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFarmRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Location too long"))]
    #[serde(default)]
    pub location: String,

    pub size_hectares: Option<f64>,
}

/// Request body for creating a field
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFieldRequest {
    pub farm_id: Uuid,

    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Area must not be negative"))]
    pub area_hectares: f64,

    #[serde(default)]
    pub soil_type: Option<SoilType>,
}

/// Request body for updating a field
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFieldRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Area must not be negative"))]
    pub area_hectares: f64,

    #[serde(default)]
    pub soil_type: Option<SoilType>,
}

/// Request body for creating a crop
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCropRequest {
    pub field_id: Uuid,

    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    pub plant_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: Option<CropStatus>,
}

/// Request body for updating a crop
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCropRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    pub plant_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: Option<CropStatus>,
}

/// Request body for creating an animal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnimalRequest {
    pub farm_id: Uuid,

    #[validate(length(min = 1, max = 120, message = "Species must be 1-120 characters"))]
    pub species: String,

    #[validate(length(min = 1, max = 64, message = "Tag id must be 1-64 characters"))]
    pub tag_id: String,

    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub health_status: Option<HealthStatus>,
}

/// Request body for updating an animal
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnimalRequest {
    #[validate(length(min = 1, max = 120, message = "Species must be 1-120 characters"))]
    pub species: String,

    #[validate(length(min = 1, max = 64, message = "Tag id must be 1-64 characters"))]
    pub tag_id: String,

    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub health_status: Option<HealthStatus>,
}

/// Request body for creating an activity entry
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    pub farm_id: Uuid,
    pub date: NaiveDate,
    pub activity_type: ActivityType,

    #[validate(length(max = 2000, message = "Description too long"))]
    #[serde(default)]
    pub description: String,

    pub field_id: Option<Uuid>,
    pub crop_id: Option<Uuid>,
    pub animal_id: Option<Uuid>,
}

/// Request body for updating an activity entry
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateActivityRequest {
    pub date: NaiveDate,
    pub activity_type: ActivityType,

    #[validate(length(max = 2000, message = "Description too long"))]
    #[serde(default)]
    pub description: String,

    pub field_id: Option<Uuid>,
    pub crop_id: Option<Uuid>,
    pub animal_id: Option<Uuid>,
}

/// Request body for updating the caller's profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 2000, message = "Bio too long"))]
    #[serde(default)]
    pub bio: String,

    #[validate(length(max = 32, message = "Phone too long"))]
    #[serde(default)]
    pub phone: String,
}
