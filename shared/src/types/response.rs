//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simple `{"detail": "..."}` response body used by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Human-readable outcome message
    pub detail: String,
}

impl DetailResponse {
    /// Create a new detail response
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Structured error body for non-auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable error message
    pub detail: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_response_serialization() {
        let body = DetailResponse::new("Verification code sent");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"], "Verification code sent");
    }

    #[test]
    fn test_error_body_fields() {
        let body = ErrorBody::new("user_not_found", "User with this email not found");
        assert_eq!(body.error, "user_not_found");
        assert!(body.detail.contains("not found"));
    }
}
