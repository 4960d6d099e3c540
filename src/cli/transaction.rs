//! Transaction CLI commands

use clap::Subcommand;

use super::parse_date_arg;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Transaction, TransactionType};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Short title (e.g. "Supermercado")
        title: String,
        /// Positive amount
        amount: f64,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        transaction_type: TransactionType,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
        /// Exact category label
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<f64>,
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
    },
}

fn resolve(service: &TransactionService, id: &str) -> FinanceResult<Transaction> {
    service
        .find(id)?
        .ok_or_else(|| FinanceError::transaction_not_found(id))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            transaction_type,
            category,
            date,
            description,
        } => {
            let date = date.as_deref().map(parse_date_arg).transpose()?;

            let txn = service.create(CreateTransactionInput {
                title,
                description,
                amount,
                transaction_type,
                category,
                date,
            })?;

            println!("Recorded {}: {}", txn.transaction_type, txn.title);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            transaction_type,
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = transaction_type {
                filter = filter.transaction_type(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            filter.start_date = from.as_deref().map(parse_date_arg).transpose()?;
            filter.end_date = to.as_deref().map(parse_date_arg).transpose()?;

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, currency));
        }

        TransactionCommands::Show { id } => {
            let txn = resolve(&service, &id)?;
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            transaction_type,
            category,
            date,
            description,
        } => {
            let txn = resolve(&service, &id)?;

            let changes = UpdateTransactionInput {
                title,
                description,
                amount,
                transaction_type,
                category,
                date: date.as_deref().map(parse_date_arg).transpose()?,
            };

            if changes.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let updated = service.update(txn.id, changes)?;
            println!("Updated transaction: {}", updated.title);
        }

        TransactionCommands::Delete { id } => {
            let txn = resolve(&service, &id)?;
            let deleted = service.delete(txn.id)?;
            println!("Deleted transaction: {}", deleted.title);
        }
    }

    Ok(())
}
