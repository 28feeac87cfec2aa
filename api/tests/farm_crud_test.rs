//! Ownership-scoped CRUD tests over the in-memory farm store.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use uuid::Uuid;

use fk_api::app::{create_app, AppState};
use fk_core::repositories::{MockFarmStore, MockOtpRepository, MockUserRepository};
use fk_core::services::auth::AuthService;
use fk_core::services::otp::{Mailer, OtpConfig, OtpService};
use fk_core::services::token::TokenService;
use fk_shared::config::JwtConfig;

struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<String, String> {
        Ok("null".to_string())
    }
}

fn test_state() -> (web::Data<AppState>, TokenService) {
    let users = Arc::new(MockUserRepository::new());
    let otp = Arc::new(OtpService::new(
        users.clone(),
        Arc::new(MockOtpRepository::new()),
        Arc::new(NullMailer),
        OtpConfig::default(),
    ));
    let tokens = TokenService::new(JwtConfig::new("test-secret"));
    let auth = Arc::new(AuthService::new(users.clone(), otp.clone(), tokens.clone()));
    let store = Arc::new(MockFarmStore::new());

    let state = web::Data::new(AppState {
        users,
        otp,
        auth,
        tokens: Arc::new(tokens.clone()),
        farms: store.clone(),
        fields: store.clone(),
        crops: store.clone(),
        animals: store.clone(),
        activities: store.clone(),
        profiles: store,
    });
    (state, tokens)
}

fn bearer(tokens: &TokenService, user: Uuid) -> (&'static str, String) {
    let token = tokens.issue(user).unwrap();
    ("Authorization", format!("Bearer {}", token.access_token))
}

#[actix_web::test]
async fn test_farm_crud_round_trip() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state)).await;
    let user = Uuid::new_v4();

    // Create
    let req = test::TestRequest::post()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({
            "name": "Hilltop",
            "location": "North valley",
            "size_hectares": 12.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let farm: serde_json::Value = test::read_body_json(resp).await;
    let farm_id = farm["id"].as_str().unwrap().to_string();

    // List contains it
    let req = test::TestRequest::get()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, user))
        .to_request();
    let farms: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(farms.as_array().unwrap().len(), 1);

    // Update
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/farms/{}", farm_id))
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({
            "name": "Hilltop Renamed",
            "location": "North valley",
            "size_hectares": 13.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/farms/{}", farm_id))
        .insert_header(bearer(&tokens, user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/farms/{}", farm_id))
        .insert_header(bearer(&tokens, user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_foreign_farm_is_invisible() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state)).await;
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, owner))
        .set_json(serde_json::json!({"name": "Private", "location": ""}))
        .to_request();
    let farm: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let farm_id = farm["id"].as_str().unwrap();

    // Stranger sees 404, not 403
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/farms/{}", farm_id))
        .insert_header(bearer(&tokens, stranger))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Stranger cannot create a field in it either
    let req = test::TestRequest::post()
        .uri("/api/v1/fields")
        .insert_header(bearer(&tokens, stranger))
        .set_json(serde_json::json!({
            "farm_id": farm_id,
            "name": "Back paddock",
            "area_hectares": 2.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Stranger's list is empty
    let req = test::TestRequest::get()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, stranger))
        .to_request();
    let farms: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(farms.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_missing_token_is_401() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/farms").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_activity_rejects_cross_farm_link() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state)).await;
    let user = Uuid::new_v4();

    // Two farms; a field on farm B
    let req = test::TestRequest::post()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({"name": "A", "location": ""}))
        .to_request();
    let farm_a: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/farms")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({"name": "B", "location": ""}))
        .to_request();
    let farm_b: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/fields")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({
            "farm_id": farm_b["id"],
            "name": "B field",
            "area_hectares": 1.0
        }))
        .to_request();
    let field_b: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    // Activity on farm A linked to farm B's field is rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/activities")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({
            "farm_id": farm_a["id"],
            "date": "2026-08-01",
            "activity_type": "watering",
            "description": "Morning round",
            "field_id": field_b["id"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Same-farm link is accepted
    let req = test::TestRequest::post()
        .uri("/api/v1/activities")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({
            "farm_id": farm_b["id"],
            "date": "2026-08-01",
            "activity_type": "watering",
            "description": "Morning round",
            "field_id": field_b["id"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_profile_get_and_update() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state)).await;
    let user = Uuid::new_v4();

    // Empty profile before any save
    let req = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header(bearer(&tokens, user))
        .to_request();
    let profile: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["bio"], "");

    // Update and read back
    let req = test::TestRequest::put()
        .uri("/api/v1/profile")
        .insert_header(bearer(&tokens, user))
        .set_json(serde_json::json!({"bio": "Dairy farmer", "phone": "+4712345678"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header(bearer(&tokens, user))
        .to_request();
    let profile: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["bio"], "Dairy farmer");
}
