//! Tests for the OTP engine covering issuance, delivery rollback, and the
//! verification state machine.

use std::sync::Arc;

use crate::domain::entities::email_otp::{EmailOtp, MAX_ATTEMPTS};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, OtpError};
use crate::repositories::{MockOtpRepository, MockUserRepository, OtpRepository, UserRepository};
use crate::services::otp::{hash_code, OtpConfig, OtpService};

use super::mocks::CapturingMailer;

struct Harness {
    users: Arc<MockUserRepository>,
    otps: Arc<MockOtpRepository>,
    mailer: Arc<CapturingMailer>,
    service: OtpService,
}

fn harness_with_config(config: OtpConfig) -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let otps = Arc::new(MockOtpRepository::new());
    let mailer = Arc::new(CapturingMailer::new());
    let service = OtpService::new(users.clone(), otps.clone(), mailer.clone(), config);
    Harness {
        users,
        otps,
        mailer,
        service,
    }
}

fn harness() -> Harness {
    harness_with_config(OtpConfig::default())
}

async fn seed_user(harness: &Harness, email: &str) -> User {
    harness
        .users
        .create(User::new(email.to_string(), "bcrypt-hash".to_string()))
        .await
        .unwrap()
}

fn otp_error(result: Result<impl std::fmt::Debug, DomainError>) -> OtpError {
    match result {
        Err(DomainError::Otp(e)) => e,
        other => panic!("expected OTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_issue_leaves_exactly_one_active_record() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;

    h.service.issue(&user).await.unwrap();
    h.service.issue(&user).await.unwrap();
    h.service.issue(&user).await.unwrap();

    assert_eq!(h.otps.count_active(user.id, "user@example.com").await, 1);
    assert_eq!(h.mailer.sent_count().await, 3);
}

#[tokio::test]
async fn test_issue_without_email_fails_without_mutation() {
    let h = harness();
    let user = User::new("   ".to_string(), "bcrypt-hash".to_string());

    let result = h.service.issue(&user).await;
    assert_eq!(otp_error(result), OtpError::NoEmailAddress);
    assert_eq!(h.otps.len().await, 0);
    assert_eq!(h.mailer.sent_count().await, 0);
}

#[tokio::test]
async fn test_issue_rolls_back_on_delivery_failure() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    h.mailer.set_failing(true);

    let result = h.service.issue(&user).await;
    assert_eq!(otp_error(result), OtpError::DeliveryFailed);
    // No live record may survive an undelivered code.
    assert_eq!(h.otps.len().await, 0);
}

#[tokio::test]
async fn test_send_code_unknown_email() {
    let h = harness();
    let result = h.service.send_code("ghost@example.com").await;
    assert_eq!(otp_error(result), OtpError::UserNotFound);
}

#[tokio::test]
async fn test_send_code_duplicate_email_creates_nothing() {
    let h = harness();
    // Seed the anomaly directly; `create` would refuse it.
    h.users
        .insert_raw(User::new("dup@example.com".to_string(), "h".to_string()))
        .await;
    h.users
        .insert_raw(User::new("dup@example.com".to_string(), "h".to_string()))
        .await;

    let result = h.service.send_code("dup@example.com").await;
    assert_eq!(otp_error(result), OtpError::DuplicateEmail);
    assert_eq!(h.otps.len().await, 0);
    assert_eq!(h.mailer.sent_count().await, 0);
}

#[tokio::test]
async fn test_verify_happy_path_activates_user() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    assert!(!user.is_active);

    h.service.issue(&user).await.unwrap();
    let code = h.mailer.last_code().await.unwrap();

    let verified = h.service.verify("user@example.com", &code).await.unwrap();
    assert!(verified.email_verified);
    assert!(verified.is_active);

    // The stored account reflects the transition.
    let stored = h.users.get(user.id).await.unwrap();
    assert!(stored.is_active && stored.email_verified);
}

#[tokio::test]
async fn test_verify_is_single_use() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;

    h.service.issue(&user).await.unwrap();
    let code = h.mailer.last_code().await.unwrap();

    h.service.verify("user@example.com", &code).await.unwrap();
    // The record is terminal: the same code never re-validates.
    let replay = h.service.verify("user@example.com", &code).await;
    assert_eq!(otp_error(replay), OtpError::NoActiveCode);
}

#[tokio::test]
async fn test_verify_without_issuance() {
    let h = harness();
    seed_user(&h, "user@example.com").await;

    let result = h.service.verify("user@example.com", "123456").await;
    assert_eq!(otp_error(result), OtpError::NoActiveCode);
}

#[tokio::test]
async fn test_verify_wrong_code_decrements_attempts() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    h.service.issue(&user).await.unwrap();

    let result = h.service.verify("user@example.com", "000000").await;
    assert_eq!(otp_error(result), OtpError::CodeInvalid);

    let record = h
        .otps
        .find_active(user.id, "user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.attempts_left, MAX_ATTEMPTS - 1);
    assert!(!record.used);
}

#[tokio::test]
async fn test_verify_attempt_exhaustion_sequence() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    h.service.issue(&user).await.unwrap();
    let code = h.mailer.last_code().await.unwrap();

    // Four invalid submissions, then exhaustion on the fifth.
    for _ in 0..4 {
        let result = h.service.verify("user@example.com", "000000").await;
        assert_eq!(otp_error(result), OtpError::CodeInvalid);
    }
    let fifth = h.service.verify("user@example.com", "000000").await;
    assert_eq!(otp_error(fifth), OtpError::AttemptsExhausted);

    // The record is terminal now; even the correct code is dead.
    let with_correct = h.service.verify("user@example.com", &code).await;
    assert_eq!(otp_error(with_correct), OtpError::NoActiveCode);
}

#[tokio::test]
async fn test_verify_preexhausted_record() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    let record = EmailOtp::new(
        user.id,
        "user@example.com".to_string(),
        hash_code("123456"),
        10,
    )
    .with_attempts(0);
    let id = record.id;
    h.otps.insert_raw(record).await;

    let result = h.service.verify("user@example.com", "123456").await;
    assert_eq!(otp_error(result), OtpError::AttemptsExhausted);
    assert!(h.otps.get(id).await.unwrap().used);
}

#[tokio::test]
async fn test_verify_expired_code_regardless_of_attempts() {
    let h = harness_with_config(OtpConfig::default().with_ttl_minutes(0));
    let user = seed_user(&h, "user@example.com").await;
    h.service.issue(&user).await.unwrap();
    let code = h.mailer.last_code().await.unwrap();

    let result = h.service.verify("user@example.com", &code).await;
    assert_eq!(otp_error(result), OtpError::CodeExpired);

    // Expiry marked the record used, so the next call sees no active code.
    let again = h.service.verify("user@example.com", &code).await;
    assert_eq!(otp_error(again), OtpError::NoActiveCode);
}

#[tokio::test]
async fn test_verify_normalizes_email_input() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    h.service.issue(&user).await.unwrap();
    let code = h.mailer.last_code().await.unwrap();

    let verified = h
        .service
        .verify("  USER@Example.COM ", &code)
        .await
        .unwrap();
    assert!(verified.email_verified);
}

#[tokio::test]
async fn test_mail_contains_code_and_validity_notice() {
    let h = harness();
    let user = seed_user(&h, "user@example.com").await;
    h.service.issue(&user).await.unwrap();

    let sent = h.mailer.sent.lock().await;
    let mail = sent.last().unwrap();
    assert_eq!(mail.to, "user@example.com");
    assert_eq!(mail.subject, "Your verification code");
    assert!(mail.body.contains("Valid for 10 minutes"));
}
