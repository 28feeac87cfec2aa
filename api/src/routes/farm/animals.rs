//! Handlers for /api/v1/animals.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use fk_core::domain::entities::Animal;
use fk_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::farm::{CreateAnimalRequest, UpdateAnimalRequest};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let animals = state.animals.list_for_owner(user.0).await?;
    Ok(HttpResponse::Ok().json(animals))
}

pub async fn get(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let animal = state
        .animals
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Animal"))?;
    Ok(HttpResponse::Ok().json(animal))
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<CreateAnimalRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;
    let request = request.into_inner();

    let farm = state
        .farms
        .find_for_owner(request.farm_id, user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Farm"))?;

    let mut animal = Animal::new(farm.id, user.0, request.species, request.tag_id);
    animal.birth_date = request.birth_date;
    if let Some(health_status) = request.health_status {
        animal.health_status = health_status;
    }

    let animal = state.animals.create(animal).await?;
    Ok(HttpResponse::Created().json(animal))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateAnimalRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let mut animal = state
        .animals
        .find_for_owner(path.into_inner(), user.0)
        .await?
        .ok_or_else(|| DomainError::not_found("Animal"))?;

    let request = request.into_inner();
    animal.species = request.species;
    animal.tag_id = request.tag_id;
    animal.birth_date = request.birth_date;
    if let Some(health_status) = request.health_status {
        animal.health_status = health_status;
    }

    let animal = state.animals.update(animal).await?;
    Ok(HttpResponse::Ok().json(animal))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.animals.delete(path.into_inner(), user.0).await?;
    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(DomainError::not_found("Animal").into())
    }
}
