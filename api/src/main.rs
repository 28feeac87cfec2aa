use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use fk_api::app::{create_app, AppState};
use fk_core::services::auth::AuthService;
use fk_core::services::otp::{OtpConfig, OtpService};
use fk_core::services::token::TokenService;
use fk_infra::database::mysql::{
    MySqlActivityRepository, MySqlAnimalRepository, MySqlCropRepository, MySqlFarmRepository,
    MySqlFieldRepository, MySqlOtpRepository, MySqlProfileRepository, MySqlUserRepository,
};
use fk_infra::{DatabasePool, HttpRelayMailer};
use fk_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting FarmKeep API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the insecure default");
    }

    let db = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    db.health_check()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let pool = db.get_pool().clone();

    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let otps = Arc::new(MySqlOtpRepository::new(pool.clone()));
    let mailer = Arc::new(
        HttpRelayMailer::new(config.mail.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
    );

    let otp_service = Arc::new(OtpService::new(
        users.clone(),
        otps,
        mailer,
        OtpConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(config.jwt.clone()));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::clone(&otp_service),
        TokenService::new(config.jwt.clone()),
    ));

    let state = web::Data::new(AppState {
        users,
        otp: otp_service,
        auth: auth_service,
        tokens: token_service,
        farms: Arc::new(MySqlFarmRepository::new(pool.clone())),
        fields: Arc::new(MySqlFieldRepository::new(pool.clone())),
        crops: Arc::new(MySqlCropRepository::new(pool.clone())),
        animals: Arc::new(MySqlAnimalRepository::new(pool.clone())),
        activities: Arc::new(MySqlActivityRepository::new(pool.clone())),
        profiles: Arc::new(MySqlProfileRepository::new(pool)),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
