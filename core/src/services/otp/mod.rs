//! Email OTP verification engine.
//!
//! Issues one-time codes bound to a (user, email) pair, delivers them via
//! the mail seam, and validates submissions against the stored digest
//! while enforcing expiry, attempt-limit, and single-use invariants.

pub mod code;
pub mod config;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use code::{generate_code, hash_code};
pub use config::OtpConfig;
pub use service::OtpService;
pub use traits::Mailer;
