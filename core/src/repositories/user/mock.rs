//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::repository::UserRepository;

/// In-memory user repository for tests and development
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a user directly, bypassing duplicate checks.
    ///
    /// Tests use this to seed the duplicate-email anomaly that `create`
    /// refuses to produce.
    pub async fn insert_raw(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Fetch a user by id without going through the trait
    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = users.values().filter(|u| u.email == email).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::validation("Email already registered"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        let first = User::new("user@example.com".to_string(), "hash".to_string());
        repo.create(first).await.unwrap();

        let second = User::new("user@example.com".to_string(), "hash".to_string());
        assert!(repo.create(second).await.is_err());
    }

    #[tokio::test]
    async fn test_find_by_email_newest_first() {
        let repo = MockUserRepository::new();
        let mut older = User::new("dup@example.com".to_string(), "hash".to_string());
        older.created_at = older.created_at - chrono::Duration::seconds(10);
        let newer = User::new("dup@example.com".to_string(), "hash".to_string());

        repo.insert_raw(older.clone()).await;
        repo.insert_raw(newer.clone()).await;

        let found = repo.find_by_email("dup@example.com").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, newer.id);
        assert_eq!(found[1].id, older.id);
    }
}
