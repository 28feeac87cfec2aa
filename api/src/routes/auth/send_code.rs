//! Handler for POST /api/v1/auth/send-code.

use actix_web::{web, HttpResponse};
use validator::Validate;

use fk_shared::types::response::DetailResponse;

use crate::app::AppState;
use crate::dto::auth::SendCodeRequest;
use crate::handlers::error::{validation_error, ApiError};

/// Issue a fresh verification code for the account registered with the
/// given email. Any previously issued unused code is superseded.
pub async fn send_code(
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate().map_err(validation_error)?;

    state.otp.send_code(&request.email).await?;

    Ok(HttpResponse::Ok().json(DetailResponse::new("Verification code sent")))
}
