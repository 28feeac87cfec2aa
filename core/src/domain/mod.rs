//! Domain layer: entities and the ownership capability.

pub mod entities;
pub mod ownership;

pub use ownership::{ensure_owner, Owned};
