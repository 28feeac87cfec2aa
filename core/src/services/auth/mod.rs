//! Registration and login flows.

pub mod service;

pub use service::{AuthService, RegisterOutcome};
