//! Handlers for /api/v1/crops.
//!
//! A crop is created on a field; resolving the field through the caller's
//! ownership chain yields the hydrated farm and owner ids.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::Crop;
use fk_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::farm::{CreateCropRequest, UpdateCropRequest};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let crops = state.crops.list_for_owner(user.0).await?;
    Ok(HttpResponse::Ok().json(crops))
}

pub async fn get(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let crop = state
        .crops
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Crop"))?;
    Ok(HttpResponse::Ok().json(crop))
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<CreateCropRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;
    let request = request.into_inner();

    let field = state
        .fields
        .find_for_owner(request.field_id, user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Field"))?;

    let mut crop = Crop::new(field.id, field.farm_id, user.0, request.name);
    crop.plant_date = request.plant_date;
    crop.expected_harvest_date = request.expected_harvest_date;
    if let Some(status) = request.status {
        crop.status = status;
    }

    let crop = state.crops.create(crop).await?;
    Ok(HttpResponse::Created().json(crop))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateCropRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let mut crop = state
        .crops
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Crop"))?;

    let request = request.into_inner();
    crop.name = request.name;
    crop.plant_date = request.plant_date;
    crop.expected_harvest_date = request.expected_harvest_date;
    if let Some(status) = request.status {
        crop.status = status;
    }

    let crop = state.crops.update(crop).await?;
    Ok(HttpResponse::Ok().json(crop))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.crops.delete(path.into_inner(), user.0).await?;
    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(DomainError::not_found("Crop").into())
    }
}
