//! Handlers for /api/v1/fields.
//!
//! A field can only be created inside a farm the caller owns; the farm
//! lookup doubles as the ownership check.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::Field;
use fk_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::farm::{CreateFieldRequest, UpdateFieldRequest};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let fields = state.fields.list_for_owner(user.0).await?;
    Ok(HttpResponse::Ok().json(fields))
}

pub async fn get(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let field = state
        .fields
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Field"))?;
    Ok(HttpResponse::Ok().json(field))
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<CreateFieldRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;
    let request = request.into_inner();

    let farm = state
        .farms
        .find_for_owner(request.farm_id, user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Farm"))?;

    let field = state
        .fields
        .create(Field::new(
            farm.id,
            user.0,
            request.name,
            request.area_hectares,
            request.soil_type.unwrap_or_default(),
        ))
        .await?;

    Ok(HttpResponse::Created().json(field))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateFieldRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let mut field = state
        .fields
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Field"))?;

    let request = request.into_inner();
    field.name = request.name;
    field.area_hectares = request.area_hectares;
    if let Some(soil_type) = request.soil_type {
        field.soil_type = soil_type;
    }

    let field = state.fields.update(field).await?;
    Ok(HttpResponse::Ok().json(field))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.fields.delete(path.into_inner(), user.0).await?;
    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(DomainError::not_found("Field").into())
    }
}
