//! Category CLI commands

use clap::Subcommand;

use crate::error::FinanceResult;
use crate::models::category::key_for_label;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List predefined categories plus any used by transactions
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List => {
            let labels = TransactionService::new(storage).available_categories()?;
            for label in labels {
                match key_for_label(&label) {
                    Some(key) => println!("{:<20} ({})", label, key),
                    None => println!("{}", label),
                }
            }
        }
    }

    Ok(())
}
