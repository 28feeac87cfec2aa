//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error
//! handling. Implementations handle the actual database operations while
//! maintaining the abstraction boundary between domain and infrastructure.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users registered with the given normalized email,
    /// newest account first.
    ///
    /// Healthy data contains at most one entry; callers decide how to
    /// treat the duplicate-email anomaly.
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Whether any user is registered with the given normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Validation)` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
