//! Handler for POST /api/v1/auth/login.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{validation_error, ApiError};

/// Authenticate with email and password, returning a bearer token.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let token = state.auth.login(&request.email, &request.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: token.access_token,
        token_type: "bearer".to_string(),
        expires_in: token.expires_in,
    }))
}
