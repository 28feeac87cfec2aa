//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod farm;
pub mod otp;
pub mod user;

pub use farm::{
    ActivityRepository, AnimalRepository, CropRepository, FarmRepository, FieldRepository,
    MockFarmStore, ProfileRepository,
};
pub use otp::{MockOtpRepository, OtpRepository};
pub use user::{MockUserRepository, UserRepository};
