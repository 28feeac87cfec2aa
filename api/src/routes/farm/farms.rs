//! Handlers for /api/v1/farms.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::Farm;
use fk_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::farm::{CreateFarmRequest, UpdateFarmRequest};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let farms = state.farms.list_for_owner(user.0).await?;
    Ok(HttpResponse::Ok().json(farms))
}

pub async fn get(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let farm = state
        .farms
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Farm"))?;
    Ok(HttpResponse::Ok().json(farm))
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<CreateFarmRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let request = request.into_inner();
    let farm = state
        .farms
        .create(Farm::new(
            user.0,
            request.name,
            request.location,
            request.size_hectares,
        ))
        .await?;

    Ok(HttpResponse::Created().json(farm))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateFarmRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let mut farm = state
        .farms
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Farm"))?;

    let request = request.into_inner();
    farm.name = request.name;
    farm.location = request.location;
    farm.size_hectares = request.size_hectares;

    let farm = state.farms.update(farm).await?;
    Ok(HttpResponse::Ok().json(farm))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.farms.delete(path.into_inner(), user.0).await?;
    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(DomainError::not_found("Farm").into())
    }
}
