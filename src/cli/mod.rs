//! CLI command handlers
//!
//! Bridges the clap argument types with the service layer. Handlers print
//! their results and return `FinanceResult` for the binary to report.

pub mod audit;
pub mod budget;
pub mod category;
pub mod export;
pub mod stats;
pub mod transaction;
pub mod user;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::transaction::parse_date;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use stats::{handle_insights_command, handle_stats_command, StatsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

pub(crate) fn parse_date_arg(value: &str) -> FinanceResult<NaiveDate> {
    parse_date(value).ok_or_else(|| {
        FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", value))
    })
}
