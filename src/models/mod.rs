//! Core data models for finanzas
//!
//! Transactions, budget goals, users and the predefined category catalogue.

pub mod budget;
pub mod category;
pub mod ids;
pub mod transaction;
pub mod user;

pub use budget::{BudgetGoal, BudgetValidationError};
pub use category::CategoryDefinition;
pub use ids::{BudgetId, TransactionId, UserId};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
pub use user::{User, UserProfile};
