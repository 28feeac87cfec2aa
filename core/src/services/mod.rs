//! Business services.

pub mod auth;
pub mod otp;
pub mod token;

pub use auth::{AuthService, RegisterOutcome};
pub use otp::{Mailer, OtpConfig, OtpService};
pub use token::{AccessToken, TokenService};
