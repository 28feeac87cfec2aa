//! Handler for POST /api/v1/auth/verify-code.

use actix_web::{web, HttpResponse};
use validator::Validate;

use fk_shared::types::response::DetailResponse;

use crate::app::AppState;
use crate::dto::auth::VerifyCodeRequest;
use crate::handlers::error::{validation_error, ApiError};

/// Validate a submitted code. On success the email is marked verified
/// and the account is activated; the code is single-use.
pub async fn verify_code(
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    state.otp.verify(&request.email, &request.code).await?;

    Ok(HttpResponse::Ok().json(DetailResponse::new("Email verified")))
}
