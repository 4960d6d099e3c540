//! Key-value preference store for the signed-in user (`profile.json`)
//!
//! Every write goes straight to disk.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{UserId, UserProfile};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

const KEY_USER_ID: &str = "user_id";
const KEY_NAME: &str = "name";
const KEY_EMAIL: &str = "email";

pub struct ProfileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            values: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let stored: BTreeMap<String, String> = read_json(&self.path)?;
        let mut values = self.values.write().map_err(lock_error)?;
        *values = stored;
        Ok(())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, values)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, FinanceError> {
        let values = self.values.read().map_err(lock_error)?;
        Ok(values.get(key).cloned())
    }

    pub fn save_user(&self, profile: &UserProfile) -> Result<(), FinanceError> {
        let mut values = self.values.write().map_err(lock_error)?;
        values.insert(KEY_USER_ID.to_string(), profile.id.to_full_string());
        values.insert(KEY_NAME.to_string(), profile.name.clone());
        values.insert(KEY_EMAIL.to_string(), profile.email.clone());
        self.persist(&values)
    }

    /// The stored profile; `None` when signed out or the entry is incomplete
    pub fn load_user(&self) -> Result<Option<UserProfile>, FinanceError> {
        let values = self.values.read().map_err(lock_error)?;

        let (Some(id), Some(email)) = (values.get(KEY_USER_ID), values.get(KEY_EMAIL)) else {
            return Ok(None);
        };
        let Ok(id) = id.parse::<UserId>() else {
            return Ok(None);
        };

        Ok(Some(UserProfile {
            id,
            name: values.get(KEY_NAME).cloned().unwrap_or_default(),
            email: email.clone(),
        }))
    }

    pub fn clear(&self) -> Result<(), FinanceError> {
        let mut values = self.values.write().map_err(lock_error)?;
        values.clear();
        self.persist(&values)
    }
}
