//! User entity representing a registered account in the FarmKeep system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, normalized to lowercase
    pub email: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the account can log in; self-registered accounts start
    /// inactive until their email is verified
    pub is_active: bool,

    /// Whether the email address has been proven via OTP
    pub email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new inactive, unverified user
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: false,
            email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as verified
    pub fn mark_email_verified(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Activates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_inactive_and_unverified() {
        let user = User::new("user@example.com".to_string(), "hash".to_string());

        assert_eq!(user.email, "user@example.com");
        assert!(!user.is_active);
        assert!(!user.email_verified);
    }

    #[test]
    fn test_verify_and_activate() {
        let mut user = User::new("user@example.com".to_string(), "hash".to_string());

        user.mark_email_verified();
        user.activate();

        assert!(user.email_verified);
        assert!(user.is_active);
        assert!(user.updated_at >= user.created_at);
    }
}
