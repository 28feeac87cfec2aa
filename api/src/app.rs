//! Application state and factory.
//!
//! `AppState` holds the wired services behind trait objects; `create_app`
//! builds the actix application with middleware and routes. The same
//! factory serves the binary and the integration tests.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use fk_core::repositories::{
    ActivityRepository, AnimalRepository, CropRepository, FarmRepository, FieldRepository,
    ProfileRepository, UserRepository,
};
use fk_core::services::auth::AuthService;
use fk_core::services::otp::OtpService;
use fk_core::services::token::TokenService;
use fk_shared::types::response::DetailResponse;

use crate::middleware::cors::create_cors;
use crate::middleware::JwtAuth;
use crate::routes;

/// Shared services behind the handlers
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub otp: Arc<OtpService>,
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub farms: Arc<dyn FarmRepository>,
    pub fields: Arc<dyn FieldRepository>,
    pub crops: Arc<dyn CropRepository>,
    pub animals: Arc<dyn AnimalRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors();
    let jwt = JwtAuth::new(Arc::clone(&state.tokens));

    App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(routes::auth::register))
                        .route("/login", web::post().to(routes::auth::login))
                        .route("/send-code", web::post().to(routes::auth::send_code))
                        .route("/verify-code", web::post().to(routes::auth::verify_code)),
                )
                .service(web::scope("").wrap(jwt).configure(routes::farm::configure)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "farmkeep-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(DetailResponse::new("The requested resource was not found"))
}
