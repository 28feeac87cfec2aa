//! CORS configuration.
//!
//! Permissive in development; restricted to the origins named in
//! `ALLOWED_ORIGINS` when `ENVIRONMENT=production`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Create a CORS middleware instance for the current environment
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        production_cors(max_age)
    } else {
        development_cors(max_age)
    }
}

fn development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(max_age)
}

fn production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let allowed = env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(max_age);

    for origin in allowed.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        cors = cors.allowed_origin(origin);
    }

    cors
}
