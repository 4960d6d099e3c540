//! Storage layer for finanzas
//!
//! One JSON file per table under the data directory, loaded into memory at
//! startup and written back atomically. The `Storage` coordinator also owns
//! the audit logger.

pub mod budgets;
pub mod file_io;
pub mod init;
pub mod profile;
pub mod transactions;
pub mod users;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use profile::ProfileStore;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use std::sync::PoisonError;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};

pub(crate) fn lock_error<T>(err: PoisonError<T>) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire lock: {}", err))
}

/// Coordinator providing access to every repository
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub users: UserRepository,
    pub profile: ProfileStore,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: FinancePaths) -> FinanceResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            users: UserRepository::new(paths.users_file()),
            profile: ProfileStore::new(paths.profile_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&self) -> FinanceResult<()> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.users.load()?;
        self.profile.load()?;
        tracing::debug!(base = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }

    /// Write the table files; the profile store persists on every change
    pub fn save_all(&self) -> FinanceResult<()> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.users.save()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> FinanceResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
