//! Domain-error-to-HTTP mapping.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; this module
//! decides the status code and the `{"detail": "..."}` body for each
//! domain error. Transport and database details never reach the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use fk_core::errors::{AuthError, DomainError, OtpError, TokenError};
use fk_shared::types::response::DetailResponse;

/// Wrapper carrying a domain error across the actix boundary
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Client-facing message; internal errors get a generic text
    fn detail(&self) -> String {
        match &self.0 {
            DomainError::Database { message } => {
                log::error!("Database error: {}", message);
                "Internal server error".to_string()
            }
            DomainError::Mail { message } => {
                log::error!("Mail transport error: {}", message);
                "Internal server error".to_string()
            }
            DomainError::Internal { message } => {
                log::error!("Internal error: {}", message);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
            DomainError::Database { .. }
            | DomainError::Mail { .. }
            | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,

            DomainError::Otp(otp) => match otp {
                OtpError::UserNotFound => StatusCode::NOT_FOUND,
                OtpError::DuplicateEmail => StatusCode::CONFLICT,
                OtpError::NoEmailAddress
                | OtpError::DeliveryFailed
                | OtpError::NoActiveCode
                | OtpError::CodeExpired
                | OtpError::AttemptsExhausted
                | OtpError::CodeInvalid => StatusCode::BAD_REQUEST,
            },

            DomainError::Auth(auth) => match auth {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
                AuthError::AccountInactive => StatusCode::FORBIDDEN,
            },

            DomainError::Token(token) => match token {
                TokenError::TokenExpired | TokenError::InvalidToken => StatusCode::UNAUTHORIZED,
                TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(DetailResponse::new(self.detail()))
    }
}

/// Convert validator output into a single 400 response
pub fn validation_error(errors: validator::ValidationErrors) -> ApiError {
    let detail = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    ApiError(DomainError::validation(detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_error_status_codes() {
        let cases = [
            (OtpError::UserNotFound, StatusCode::NOT_FOUND),
            (OtpError::DuplicateEmail, StatusCode::CONFLICT),
            (OtpError::CodeInvalid, StatusCode::BAD_REQUEST),
            (OtpError::CodeExpired, StatusCode::BAD_REQUEST),
            (OtpError::AttemptsExhausted, StatusCode::BAD_REQUEST),
            (OtpError::NoActiveCode, StatusCode::BAD_REQUEST),
            (OtpError::DeliveryFailed, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(DomainError::Otp(err)).status_code(), status);
        }
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let err = ApiError(DomainError::Database {
            message: "connection refused to 10.0.0.5:3306".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            ApiError(DomainError::Auth(AuthError::InvalidCredentials)).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError(DomainError::Auth(AuthError::EmailAlreadyRegistered)).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(DomainError::Auth(AuthError::AccountInactive)).status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
