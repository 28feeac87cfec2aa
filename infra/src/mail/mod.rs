//! Outbound mail transports.
//!
//! Two implementations of the core `Mailer` seam: an HTTP relay client
//! for production and a console mock for development and testing.

mod mock;
mod relay;

pub use mock::MockMailer;
pub use relay::HttpRelayMailer;
