//! The OTP engine: issuance and the verification state machine.

use std::sync::Arc;

use fk_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::email_otp::EmailOtp;
use crate::domain::entities::user::User;
use crate::errors::{DomainResult, OtpError};
use crate::repositories::{OtpRepository, UserRepository};

use super::code::{generate_code, hash_code};
use super::config::OtpConfig;
use super::traits::Mailer;

/// Email OTP verification engine.
///
/// Owns the full lifecycle of a verification code: supersede-and-issue,
/// delivery with rollback, and the per-record verification state machine.
pub struct OtpService {
    users: Arc<dyn UserRepository>,
    otps: Arc<dyn OtpRepository>,
    mailer: Arc<dyn Mailer>,
    config: OtpConfig,
}

impl OtpService {
    /// Create a new engine over the given collaborators
    pub fn new(
        users: Arc<dyn UserRepository>,
        otps: Arc<dyn OtpRepository>,
        mailer: Arc<dyn Mailer>,
        config: OtpConfig,
    ) -> Self {
        Self {
            users,
            otps,
            mailer,
            config,
        }
    }

    /// Issue a fresh code for the user's email and deliver it.
    ///
    /// Supersedes every prior unused record for the (user, email) pair in
    /// one atomic store operation, then mails the raw code. If delivery
    /// fails the new record is deleted again: a code that was never
    /// delivered must not stay live.
    pub async fn issue(&self, user: &User) -> DomainResult<()> {
        let email = normalize_email(&user.email);
        if email.is_empty() {
            return Err(OtpError::NoEmailAddress.into());
        }

        let code = generate_code();
        let record = EmailOtp::new(user.id, email.clone(), hash_code(&code), self.config.ttl_minutes)
            .with_attempts(self.config.max_attempts);
        let record = self.otps.replace_active(record).await?;

        tracing::info!(
            email = %mask_email(&email),
            otp_id = %record.id,
            event = "otp_issued",
            "Issued new verification code"
        );

        let body = format!(
            "Your verification code: {}\nValid for {} minutes.",
            code, self.config.ttl_minutes
        );
        match self.mailer.send(&email, &self.config.mail_subject, &body).await {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(&email),
                    message_id = %message_id,
                    event = "otp_delivered",
                    "Verification code dispatched"
                );
                Ok(())
            }
            Err(transport_error) => {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %transport_error,
                    event = "otp_delivery_failed",
                    "Mail dispatch failed, rolling back issued code"
                );
                if let Err(rollback_error) = self.otps.delete(record.id).await {
                    tracing::error!(
                        otp_id = %record.id,
                        error = %rollback_error,
                        "Failed to roll back undelivered code"
                    );
                }
                Err(OtpError::DeliveryFailed.into())
            }
        }
    }

    /// Resolve a user from an email address and issue a code (the
    /// standalone "send code" / resend operation).
    pub async fn send_code(&self, email: &str) -> DomainResult<()> {
        let user = self.resolve_user(email).await?;
        self.issue(&user).await
    }

    /// Run one verification attempt against the active record.
    ///
    /// Exactly one state transition happens per call; see the transition
    /// table in the module docs. On success the user's email is marked
    /// verified and an inactive account is activated.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<User> {
        let normalized = normalize_email(email);
        let mut user = self.resolve_user(&normalized).await?;

        let Some(otp) = self.otps.find_active(user.id, &normalized).await? else {
            return Err(OtpError::NoActiveCode.into());
        };

        if otp.is_expired() {
            self.otps.mark_used(otp.id).await?;
            tracing::info!(otp_id = %otp.id, event = "otp_expired", "Code expired on verification");
            return Err(OtpError::CodeExpired.into());
        }

        if !otp.has_attempts() {
            self.otps.mark_used(otp.id).await?;
            return Err(OtpError::AttemptsExhausted.into());
        }

        if hash_code(code) != otp.code_hash {
            let remaining = self.otps.decrement_attempts(otp.id).await?;
            tracing::warn!(
                otp_id = %otp.id,
                remaining_attempts = remaining,
                event = "otp_mismatch",
                "Verification code mismatch"
            );
            if remaining <= 0 {
                self.otps.mark_used(otp.id).await?;
                return Err(OtpError::AttemptsExhausted.into());
            }
            return Err(OtpError::CodeInvalid.into());
        }

        self.otps.mark_used(otp.id).await?;

        user.mark_email_verified();
        if !user.is_active {
            user.activate();
        }
        let user = self.users.update(user).await?;

        tracing::info!(
            email = %mask_email(&normalized),
            event = "otp_verified",
            "Email address verified"
        );
        Ok(user)
    }

    /// Resolve the single user behind a normalized email address.
    ///
    /// Zero matches and multiple matches fail distinctly; the duplicate
    /// case is a data-integrity anomaly that is surfaced, never resolved
    /// by picking one of the accounts.
    async fn resolve_user(&self, email: &str) -> DomainResult<User> {
        let normalized = normalize_email(email);
        let mut matches = self.users.find_by_email(&normalized).await?;
        match matches.len() {
            0 => Err(OtpError::UserNotFound.into()),
            1 => Ok(matches.remove(0)),
            n => {
                tracing::error!(
                    email = %mask_email(&normalized),
                    count = n,
                    event = "duplicate_email",
                    "Multiple users share one email address"
                );
                Err(OtpError::DuplicateEmail.into())
            }
        }
    }
}
