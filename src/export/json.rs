//! Full JSON export with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::calculate_balance_summary;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetGoal, Transaction};
use crate::storage::Storage;

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<BudgetGoal>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    pub budget_count: usize,

    pub total_income: f64,

    pub total_expense: f64,

    /// Earliest parseable transaction date
    pub earliest_transaction: Option<String>,

    /// Latest parseable transaction date
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let summary = calculate_balance_summary(&transactions);
        let dates: Vec<_> = transactions.iter().filter_map(|t| t.parsed_date()).collect();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            earliest_transaction: dates.iter().min().map(|d| d.to_string()),
            latest_transaction: dates.iter().max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        })
    }
}

pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
