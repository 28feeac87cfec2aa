//! Auth endpoint DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for POST /api/v1/auth/send-code
#[derive(Debug, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Request body for POST /api/v1/auth/verify-code
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Response body for a successful registration
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub detail: String,
    pub user_id: Uuid,
    /// Whether the verification code was delivered; false means the
    /// client should call send-code again
    pub code_sent: bool,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_code_request_rejects_blank_email() {
        let req = SendCodeRequest {
            email: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());

        let ok = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
