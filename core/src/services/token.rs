//! Access-token issuance and validation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fk_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult, TokenError};

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// An issued access token with its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The signed JWT
    pub access_token: String,
    /// Seconds until expiry
    pub expires_in: i64,
}

/// HS256 token service
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// Create a new token service
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Issue an access token for a user
    pub fn issue(&self, user_id: Uuid) -> DomainResult<AccessToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iss: self.config.issuer.clone(),
            iat: now,
            exp: now + self.config.access_token_expiry,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;

        Ok(AccessToken {
            access_token: token,
            expires_in: self.config.access_token_expiry,
        })
    }

    /// Validate a token and return the user id it was issued for
    pub fn validate(&self, token: &str) -> DomainResult<Uuid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                DomainError::Token(TokenError::TokenExpired)
            }
            _ => DomainError::Token(TokenError::InvalidToken),
        })?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new("test-secret"))
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id).unwrap();
        assert_eq!(token.expires_in, 3600);
        assert_eq!(svc.validate(&token.access_token).unwrap(), user_id);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let svc = service();
        assert!(matches!(
            svc.validate("not-a-token"),
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let token = service().issue(Uuid::new_v4()).unwrap();
        let other = TokenService::new(JwtConfig::new("different-secret"));
        assert!(other.validate(&token.access_token).is_err());
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        let config = JwtConfig::new("test-secret").with_access_expiry_minutes(-5);
        let svc = TokenService::new(config);
        let token = svc.issue(Uuid::new_v4()).unwrap();
        assert!(matches!(
            svc.validate(&token.access_token),
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }
}
