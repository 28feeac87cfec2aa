//! Authentication service: registration with email verification and
//! password login.

use std::sync::Arc;

use fk_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, OtpError};
use crate::repositories::UserRepository;
use crate::services::otp::OtpService;
use crate::services::token::{AccessToken, TokenService};

/// Result of a registration call
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    /// The created (inactive) user
    pub user: User,
    /// Whether the verification code was delivered
    pub code_sent: bool,
}

/// Authentication service over the user store, the OTP engine, and the
/// token service
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    otp: Arc<OtpService>,
    tokens: TokenService,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(users: Arc<dyn UserRepository>, otp: Arc<OtpService>, tokens: TokenService) -> Self {
        Self { users, otp, tokens }
    }

    /// Register a new account and kick off email verification.
    ///
    /// The account is created inactive; it activates when the OTP flow
    /// completes. A delivery failure does not undo the registration --
    /// the client can request a resend -- but it is reported in the
    /// outcome.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<RegisterOutcome> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(DomainError::validation("Invalid email address"));
        }
        if password.len() < 8 {
            return Err(DomainError::validation(
                "Password must be at least 8 characters",
            ));
        }
        if self.users.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            DomainError::Internal {
                message: "Password hashing failed".to_string(),
            }
        })?;

        let user = self.users.create(User::new(email.clone(), password_hash)).await?;
        tracing::info!(
            email = %mask_email(&email),
            user_id = %user.id,
            event = "user_registered",
            "Registered new account"
        );

        let code_sent = match self.otp.issue(&user).await {
            Ok(()) => true,
            Err(DomainError::Otp(OtpError::DeliveryFailed)) => {
                tracing::warn!(
                    user_id = %user.id,
                    "Verification code delivery failed during registration"
                );
                false
            }
            Err(other) => return Err(other),
        };

        Ok(RegisterOutcome { user, code_sent })
    }

    /// Authenticate with email and password, returning an access token.
    ///
    /// Unknown email and wrong password fail identically so the endpoint
    /// does not reveal which addresses are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        let email = normalize_email(email);
        let mut matches = self.users.find_by_email(&email).await?;

        let user = match matches.len() {
            0 => return Err(AuthError::InvalidCredentials.into()),
            1 => matches.remove(0),
            _ => return Err(OtpError::DuplicateEmail.into()),
        };

        let password_ok = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            tracing::error!(error = %e, "Password verification failed");
            DomainError::Internal {
                message: "Password verification failed".to_string(),
            }
        })?;
        if !password_ok {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        self.tokens.issue(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockOtpRepository, MockUserRepository};
    use crate::services::otp::OtpConfig;
    use async_trait::async_trait;

    struct NullMailer;

    #[async_trait]
    impl crate::services::otp::Mailer for NullMailer {
        async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<String, String> {
            Ok("null".to_string())
        }
    }

    fn service() -> (Arc<MockUserRepository>, AuthService) {
        let users = Arc::new(MockUserRepository::new());
        let otp = Arc::new(OtpService::new(
            users.clone(),
            Arc::new(MockOtpRepository::new()),
            Arc::new(NullMailer),
            OtpConfig::default(),
        ));
        let auth = AuthService::new(
            users.clone(),
            otp,
            TokenService::new(fk_shared::config::JwtConfig::new("test-secret")),
        );
        (users, auth)
    }

    #[tokio::test]
    async fn test_register_creates_inactive_user_and_sends_code() {
        let (_, auth) = service();
        let outcome = auth
            .register("New@Example.com", "password123")
            .await
            .unwrap();

        assert_eq!(outcome.user.email, "new@example.com");
        assert!(!outcome.user.is_active);
        assert!(outcome.code_sent);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate() {
        let (_, auth) = service();
        auth.register("new@example.com", "password123").await.unwrap();

        let result = auth.register("new@example.com", "password123").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let (_, auth) = service();
        assert!(auth.register("not-an-email", "password123").await.is_err());
        assert!(auth.register("ok@example.com", "short").await.is_err());
    }

    #[tokio::test]
    async fn test_login_requires_active_account() {
        let (users, auth) = service();
        let outcome = auth.register("new@example.com", "password123").await.unwrap();

        let result = auth.login("new@example.com", "password123").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::AccountInactive))
        ));

        let mut user = users.get(outcome.user.id).await.unwrap();
        user.activate();
        users.update(user).await.unwrap();

        let token = auth.login("new@example.com", "password123").await.unwrap();
        assert!(!token.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_fail_alike() {
        let (_, auth) = service();
        auth.register("new@example.com", "password123").await.unwrap();

        let wrong = auth.login("new@example.com", "wrong-password").await;
        let unknown = auth.login("ghost@example.com", "password123").await;
        assert!(matches!(
            wrong,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            unknown,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
    }
}
