//! User repository backed by `users.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::user::normalize_email;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let mut users: Vec<_> = {
            let data = self.data.read().map_err(lock_error)?;
            data.values().cloned().collect()
        };
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, FinanceError> {
        let email = normalize_email(email);
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().find(|u| u.email == email).cloned())
    }

    /// Insert a new user; the email must not be taken
    pub fn insert(&self, user: User) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;

        if data.values().any(|u| u.email == user.email) {
            return Err(FinanceError::Duplicate {
                entity_type: "User",
                identifier: user.email,
            });
        }

        data.insert(user.id, user);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
