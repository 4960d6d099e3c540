//! Budget CLI commands

use clap::Subcommand;

use super::parse_date_arg;
use crate::config::Settings;
use crate::display::{format_amount, format_budget_list, format_budget_progress};
use crate::error::{FinanceError, FinanceResult};
use crate::services::{BudgetInput, BudgetService, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budget goals
    List,

    /// Set the monthly limit for a category (creates the goal if needed)
    Set {
        /// Category label
        category: String,
        /// Monthly limit; 0 disables progress tracking
        limit: f64,
        /// Icon key (defaults from the category catalogue)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a budget goal
    Delete {
        /// Category label or budget ID
        budget: String,
    },

    /// Show spending against each budget
    Progress {
        /// Only count transactions from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Only count transactions up to this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            let goals = service.list()?;
            print!("{}", format_budget_list(&goals, currency));
        }

        BudgetCommands::Set {
            category,
            limit,
            icon,
        } => {
            let goal = service.upsert(BudgetInput {
                category,
                limit,
                icon_key: icon,
            })?;
            println!(
                "Budget for {} set to {}",
                goal.category,
                format_amount(goal.limit, currency)
            );
        }

        BudgetCommands::Delete { budget } => {
            let goal = service
                .find(&budget)?
                .ok_or_else(|| FinanceError::budget_not_found(&budget))?;
            service.delete(goal.id)?;
            println!("Deleted budget: {}", goal.category);
        }

        BudgetCommands::Progress { from, to } => {
            let mut filter = TransactionFilter::new();
            filter.start_date = from.as_deref().map(parse_date_arg).transpose()?;
            filter.end_date = to.as_deref().map(parse_date_arg).transpose()?;

            let transactions = TransactionService::new(storage).list(filter)?;
            let progress = service.progress(&transactions)?;
            print!(
                "{}",
                format_budget_progress(&progress, currency, settings.budget_alert_threshold)
            );
        }
    }

    Ok(())
}

