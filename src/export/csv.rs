//! CSV export of transactions and budget goals

use std::io::Write;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Type")]
    transaction_type: &'static str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct BudgetRecord<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Limit")]
    limit: String,
    #[serde(rename = "Icon")]
    icon_key: &'a str,
}

fn export_error(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Transactions newest first; amounts are unsigned with two decimals
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let transactions = storage.transactions.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in &transactions {
        csv_writer
            .serialize(TransactionRecord {
                id: txn.id.to_full_string(),
                date: &txn.date,
                title: &txn.title,
                description: &txn.description,
                category: &txn.category,
                transaction_type: txn.transaction_type.as_storage(),
                amount: format!("{:.2}", txn.amount),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let budgets = storage.budgets.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for goal in &budgets {
        csv_writer
            .serialize(BudgetRecord {
                id: goal.id.to_full_string(),
                category: &goal.category,
                limit: format!("{:.2}", goal.limit),
                icon_key: &goal.icon_key,
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::{Transaction, TransactionType};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_transactions_csv_quotes_fields() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .upsert(
                Transaction::new("Cena, amigos", 48.25, TransactionType::Expense, "Social", "2024-10-08")
                    .with_description("Dijo \"gracias\""),
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Title,Description,Category,Type,Amount"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Cena, amigos\""));
        assert!(row.contains("\"Dijo \"\"gracias\"\"\""));
        assert!(row.ends_with("Social,EXPENSE,48.25"));
    }

    #[test]
    fn test_budgets_csv() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .budgets
            .upsert(crate::models::BudgetGoal::for_category("Alimentos", 300.0))
            .unwrap();

        let mut buffer = Vec::new();
        export_budgets_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("ID,Category,Limit,Icon\n"));
        assert!(text.contains(",Alimentos,300.00,food"));
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
