//! Request and response DTOs.

pub mod auth;
pub mod farm;
