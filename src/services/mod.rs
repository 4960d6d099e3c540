//! Service layer for finanzas
//!
//! Validation and orchestration on top of the storage layer. Every write is
//! persisted immediately and recorded in the audit log.

pub mod budget;
pub mod transaction;
pub mod user;
pub mod validation;

pub use budget::{BudgetInput, BudgetService};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
pub use user::UserService;
pub use validation::AuthMode;
