//! Ownership-scoped CRUD endpoints for the farm domain.
//!
//! All routes here sit behind the JWT middleware; the authenticated user
//! id arrives via the `AuthUser` extractor and every repository call is
//! scoped by it.

pub mod activities;
pub mod animals;
pub mod crops;
pub mod farms;
pub mod fields;
pub mod profile;

use actix_web::web;

/// Register the farm-domain routes on a scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/farms")
            .route("", web::get().to(farms::list))
            .route("", web::post().to(farms::create))
            .route("/{id}", web::get().to(farms::get))
            .route("/{id}", web::put().to(farms::update))
            .route("/{id}", web::delete().to(farms::delete)),
    )
    .service(
        web::scope("/fields")
            .route("", web::get().to(fields::list))
            .route("", web::post().to(fields::create))
            .route("/{id}", web::get().to(fields::get))
            .route("/{id}", web::put().to(fields::update))
            .route("/{id}", web::delete().to(fields::delete)),
    )
    .service(
        web::scope("/crops")
            .route("", web::get().to(crops::list))
            .route("", web::post().to(crops::create))
            .route("/{id}", web::get().to(crops::get))
            .route("/{id}", web::put().to(crops::update))
            .route("/{id}", web::delete().to(crops::delete)),
    )
    .service(
        web::scope("/animals")
            .route("", web::get().to(animals::list))
            .route("", web::post().to(animals::create))
            .route("/{id}", web::get().to(animals::get))
            .route("/{id}", web::put().to(animals::update))
            .route("/{id}", web::delete().to(animals::delete)),
    )
    .service(
        web::scope("/activities")
            .route("", web::get().to(activities::list))
            .route("", web::post().to(activities::create))
            .route("/{id}", web::get().to(activities::get))
            .route("/{id}", web::put().to(activities::update))
            .route("/{id}", web::delete().to(activities::delete)),
    )
    .service(
        web::scope("/profile")
            .route("", web::get().to(profile::get))
            .route("", web::put().to(profile::update)),
    );
}
