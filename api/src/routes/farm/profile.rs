//! Handlers for /api/v1/profile.
//!
//! One profile per account; GET for an account that never saved one
//! returns an empty profile rather than 404.

use actix_web::{web, HttpResponse};
use validator::Validate;

use fk_core::domain::entities::UserProfile;

use crate::app::AppState;
use crate::dto::farm::UpdateProfileRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthUser;

pub async fn get(user: AuthUser, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let profile = state
        .profiles
        .find_by_user(user.0)
        .await?
        .unwrap_or_else(|| UserProfile::new(user.0));
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;
    let request = request.into_inner();

    let profile = state
        .profiles
        .upsert(UserProfile {
            user_id: user.0,
            bio: request.bio,
            phone: request.phone,
        })
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
