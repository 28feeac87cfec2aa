//! Handlers for /api/v1/activities.
//!
//! An activity's optional field/crop/animal links must resolve to the
//! same farm as the activity itself; cross-farm links are rejected.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::ActivityLog;
use fk_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::farm::{CreateActivityRequest, UpdateActivityRequest};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let activities = state.activities.list_for_owner(user.0).await?;
    Ok(HttpResponse::Ok().json(activities))
}

pub async fn get(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let activity = state
        .activities
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Activity entry"))?;
    Ok(HttpResponse::Ok().json(activity))
}

/// Check that every provided link resolves to the given farm
async fn check_links(
    state: &AppState,
    user: Uuid,
    farm_id: Uuid,
    field_id: Option<Uuid>,
    crop_id: Option<Uuid>,
    animal_id: Option<Uuid>,
) -> Result<(), DomainError> {
    if let Some(id) = field_id {
        let field = state
            .fields
            .find_for_owner(id, user)
            .await?
            .ok_or_else(|| DomainError::not_found("Field"))?;
        if field.farm_id != farm_id {
            return Err(DomainError::validation(
                "Field does not belong to this farm",
            ));
        }
    }
    if let Some(id) = crop_id {
        let crop = state
            .crops
            .find_for_owner(id, user)
            .await?
            .ok_or_else(|| DomainError::not_found("Crop"))?;
        if crop.farm_id != farm_id {
            return Err(DomainError::validation("Crop does not belong to this farm"));
        }
    }
    if let Some(id) = animal_id {
        let animal = state
            .animals
            .find_for_owner(id, user)
            .await?
            .ok_or_else(|| DomainError::not_found("Animal"))?;
        if animal.farm_id != farm_id {
            return Err(DomainError::validation(
                "Animal does not belong to this farm",
            ));
        }
    }
    Ok(())
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<CreateActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;
    let request = request.into_inner();

    let farm = state
        .farms
        .find_for_owner(request.farm_id, user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Farm"))?;

    check_links(
        state.get_ref(),
        user.0,
        farm.id,
        request.field_id,
        request.crop_id,
        request.animal_id,
    )
    .await?;

    let mut activity = ActivityLog::new(
        farm.id,
        user.0,
        request.date,
        request.activity_type,
        request.description,
    );
    activity.field_id = request.field_id;
    activity.crop_id = request.crop_id;
    activity.animal_id = request.animal_id;

    let activity = state.activities.create(activity).await?;
    Ok(HttpResponse::Created().json(activity))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let mut activity = state
        .activities
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Activity entry"))?;

    let request = request.into_inner();
    check_links(
        state.get_ref(),
        user.0,
        activity.farm_id,
        request.field_id,
        request.crop_id,
        request.animal_id,
    )
    .await?;

    activity.date = request.date;
    activity.activity_type = request.activity_type;
    activity.description = request.description;
    activity.field_id = request.field_id;
    activity.crop_id = request.crop_id;
    activity.animal_id = request.animal_id;

    let activity = state.activities.update(activity).await?;
    Ok(HttpResponse::Ok().json(activity))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.activities.delete(path.into_inner(), user.0).await?;
    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(DomainError::not_found("Activity entry").into())
    }
}
