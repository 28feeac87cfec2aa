//! Handler for POST /api/v1/auth/register.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{validation_error, ApiError};

/// Create an account and kick off email verification.
///
/// Returns 201 with the new user id. `code_sent: false` means the
/// verification mail could not be delivered and the client should call
/// send-code again.
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    let outcome = state.auth.register(&request.email, &request.password).await?;

    let detail = if outcome.code_sent {
        "Account created. Verification code sent"
    } else {
        "Account created. Code delivery failed, request a new code"
    };

    Ok(HttpResponse::Created().json(RegisterResponse {
        detail: detail.to_string(),
        user_id: outcome.user.id,
        code_sent: outcome.code_sent,
    }))
}
