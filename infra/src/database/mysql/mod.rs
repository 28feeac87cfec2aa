//! MySQL repository implementations backed by sqlx.
//!
//! Every read on a farm-domain table is scoped by the ownership chain in
//! the query itself (`farms.owner_id`, `fields.farm_id -> farms.owner_id`,
//! and so on), so a record owned by someone else is indistinguishable from
//! a missing one.

mod activity_repository_impl;
mod animal_repository_impl;
mod crop_repository_impl;
mod farm_repository_impl;
mod field_repository_impl;
mod otp_repository_impl;
mod profile_repository_impl;
mod user_repository_impl;

pub use activity_repository_impl::MySqlActivityRepository;
pub use animal_repository_impl::MySqlAnimalRepository;
pub use crop_repository_impl::MySqlCropRepository;
pub use farm_repository_impl::MySqlFarmRepository;
pub use field_repository_impl::MySqlFieldRepository;
pub use otp_repository_impl::MySqlOtpRepository;
pub use profile_repository_impl::MySqlProfileRepository;
pub use user_repository_impl::MySqlUserRepository;

use fk_core::errors::DomainError;
use uuid::Uuid;

/// Map a sqlx error into the domain database error with context
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}

/// Parse a CHAR(36) column back into a Uuid
pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID in database: {}", e),
    })
}
