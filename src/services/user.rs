//! User service: registration, sign-in and the signed-in profile
//!
//! Passwords are hashed with Argon2id into a PHC string; the salt travels
//! inside that string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use super::validation::{validate_form, AuthMode};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{User, UserProfile};
use crate::storage::Storage;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Ya existe un usuario con este correo.";
pub const BAD_CREDENTIALS_MESSAGE: &str = "Correo o contraseña incorrectos.";

pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create an account and sign it in
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> FinanceResult<UserProfile> {
        let errors = validate_form(AuthMode::Register, name, email, password, confirm_password);
        if !errors.is_empty() {
            return Err(FinanceError::Validation(errors.join(" ")));
        }

        if self.storage.users.find_by_email(email)?.is_some() {
            return Err(FinanceError::Authentication(DUPLICATE_EMAIL_MESSAGE.into()));
        }

        let user = User::new(name, email, hash_password(password)?);
        let profile = user.profile();

        self.storage.users.insert(user).map_err(|e| match e {
            FinanceError::Duplicate { .. } => {
                FinanceError::Authentication(DUPLICATE_EMAIL_MESSAGE.into())
            }
            other => other,
        })?;
        self.storage.users.save()?;

        // The hash never reaches the audit log
        self.storage.log_create(
            EntityType::User,
            profile.id.to_string(),
            Some(profile.name.clone()),
            &profile,
        )?;

        self.storage.profile.save_user(&profile)?;
        tracing::info!(user = %profile.id, "user registered");
        Ok(profile)
    }

    /// Check credentials and sign the user in
    pub fn authenticate(&self, email: &str, password: &str) -> FinanceResult<UserProfile> {
        let errors = validate_form(AuthMode::Login, "", email, password, "");
        if !errors.is_empty() {
            return Err(FinanceError::Validation(errors.join(" ")));
        }

        let user = self
            .storage
            .users
            .find_by_email(email)?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or_else(|| FinanceError::Authentication(BAD_CREDENTIALS_MESSAGE.into()))?;

        let profile = user.profile();
        self.storage.profile.save_user(&profile)?;
        tracing::debug!(user = %profile.id, "signed in");
        Ok(profile)
    }

    /// The signed-in user, if any
    pub fn current(&self) -> FinanceResult<Option<UserProfile>> {
        self.storage.profile.load_user()
    }

    pub fn logout(&self) -> FinanceResult<()> {
        self.storage.profile.clear()
    }
}

fn hash_password(password: &str) -> FinanceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| FinanceError::Storage(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, stored: &str) -> bool {
    // Malformed stored hashes never verify
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
