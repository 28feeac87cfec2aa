//! Domain-specific error type definitions for authentication and the
//! email verification engine. The presentation layer maps these onto HTTP
//! status codes and client-facing messages.

use thiserror::Error;

/// Outcomes of the email OTP engine that are not `Verified`.
///
/// Issuance produces `NoEmailAddress` and `DeliveryFailed`; verification
/// produces the remainder. `DuplicateEmail` signals a data-integrity
/// problem upstream and is surfaced rather than silently resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("User has no email address")]
    NoEmailAddress,

    #[error("Cannot send code. Check mail transport settings")]
    DeliveryFailed,

    #[error("User with this email not found")]
    UserNotFound,

    #[error("Multiple users with this email. Fix duplicates in DB")]
    DuplicateEmail,

    #[error("No active code found. Send a new code")]
    NoActiveCode,

    #[error("Code expired. Send a new code")]
    CodeExpired,

    #[error("Too many attempts. Send a new code")]
    AttemptsExhausted,

    #[error("Invalid code")]
    CodeInvalid,
}

/// Authentication-related errors (registration and login)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    EmailAlreadyRegistered,

    #[error("Account is not activated. Verify your email first")]
    AccountInactive,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
