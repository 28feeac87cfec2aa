//! Domain entities.

pub mod activity;
pub mod animal;
pub mod crop;
pub mod email_otp;
pub mod farm;
pub mod field;
pub mod profile;
pub mod user;

pub use activity::{ActivityLog, ActivityType};
pub use animal::{Animal, HealthStatus};
pub use crop::{Crop, CropStatus};
pub use email_otp::EmailOtp;
pub use farm::Farm;
pub use field::{Field, SoilType};
pub use profile::UserProfile;
pub use user::User;
