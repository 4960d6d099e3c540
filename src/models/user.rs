//! User account model
//!
//! Users are created at registration and read at sign-in; they are never
//! updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Trimmed and lower-cased
    pub email: String,
    /// Argon2 PHC string (algorithm, parameters and salt included)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into().trim().to_string(),
            email: normalize_email(&email.into()),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Public projection without credentials
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The signed-in user as kept in the profile store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Canonical email form used for lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
