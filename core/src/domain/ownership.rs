//! Ownership capability for farm-domain entities.
//!
//! Every owned resource resolves, directly or through its foreign-key
//! chain, to the `Farm.owner` that controls access to it. Repositories
//! hydrate entities with that resolved owner so access checks are a single
//! trait call instead of a chain of type tests.

use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Implemented by every entity that belongs to exactly one user.
pub trait Owned {
    /// The user at the root of this entity's ownership chain.
    fn owner_id(&self) -> Uuid;
}

/// Reject access to an entity the user does not own.
///
/// Foreign resources are reported as not found rather than forbidden, so
/// the API does not reveal which identifiers exist.
pub fn ensure_owner<T: Owned>(entity: &T, user_id: Uuid, resource: &str) -> DomainResult<()> {
    if entity.owner_id() == user_id {
        Ok(())
    } else {
        Err(DomainError::not_found(resource))
    }
}
