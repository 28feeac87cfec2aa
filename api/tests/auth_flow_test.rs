//! End-to-end tests for the auth endpoints over in-memory stores.

use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;

use fk_api::app::{create_app, AppState};
use fk_core::repositories::{MockFarmStore, MockOtpRepository, MockUserRepository};
use fk_core::services::auth::AuthService;
use fk_core::services::otp::{Mailer, OtpConfig, OtpService};
use fk_core::services::token::TokenService;
use fk_shared::config::JwtConfig;

/// Mailer that records the last body so tests can read the mailed code
#[derive(Clone, Default)]
struct CapturingMailer {
    last_body: Arc<Mutex<Option<String>>>,
}

impl CapturingMailer {
    fn last_code(&self) -> Option<String> {
        let body = self.last_body.lock().unwrap().clone()?;
        body.split_whitespace()
            .find(|chunk| chunk.len() == 6 && chunk.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, _to: &str, _subject: &str, body: &str) -> Result<String, String> {
        *self.last_body.lock().unwrap() = Some(body.to_string());
        Ok("captured".to_string())
    }
}

fn test_state(mailer: CapturingMailer) -> web::Data<AppState> {
    let users = Arc::new(MockUserRepository::new());
    let otp = Arc::new(OtpService::new(
        users.clone(),
        Arc::new(MockOtpRepository::new()),
        Arc::new(mailer),
        OtpConfig::default(),
    ));
    let tokens = TokenService::new(JwtConfig::new("test-secret"));
    let auth = Arc::new(AuthService::new(users.clone(), otp.clone(), tokens.clone()));
    let store = Arc::new(MockFarmStore::new());

    web::Data::new(AppState {
        users,
        otp,
        auth,
        tokens: Arc::new(tokens),
        farms: store.clone(),
        fields: store.clone(),
        crops: store.clone(),
        animals: store.clone(),
        activities: store.clone(),
        profiles: store,
    })
}

#[actix_web::test]
async fn test_register_verify_login_flow() {
    let mailer = CapturingMailer::default();
    let app = test::init_service(create_app(test_state(mailer.clone()))).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code_sent"], true);

    // Login before verification is forbidden
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Verify with the mailed code
    let code = mailer.last_code().expect("code was mailed");
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "code": code
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Login now succeeds
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["access_token"].as_str().unwrap().len() > 20);
    assert_eq!(body["token_type"], "bearer");
}

#[actix_web::test]
async fn test_send_code_unknown_email_is_404() {
    let app = test::init_service(create_app(test_state(CapturingMailer::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(serde_json::json!({"email": "ghost@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[actix_web::test]
async fn test_verify_code_wrong_code_is_400() {
    let mailer = CapturingMailer::default();
    let app = test::init_service(create_app(test_state(mailer.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "password": "password123"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let code = mailer.last_code().unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(serde_json::json!({
            "email": "farmer@example.com",
            "code": wrong
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_duplicate_email_is_409() {
    let app = test::init_service(create_app(test_state(CapturingMailer::default()))).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({
                "email": "farmer@example.com",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn test_send_code_blank_email_is_400() {
    let app = test::init_service(create_app(test_state(CapturingMailer::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(serde_json::json!({"email": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(test_state(CapturingMailer::default()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
