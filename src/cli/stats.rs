//! Statistics and insight commands

use chrono::Local;
use clap::Subcommand;

use super::parse_date_arg;
use crate::analytics::{
    calculate_balance_summary, calculate_expense_by_category, calculate_time_series,
    InsightGenerator, StatisticsRange,
};
use crate::config::Settings;
use crate::display::{
    format_balance_summary, format_expense_breakdown, format_insights, format_time_series,
};
use crate::error::FinanceResult;
use crate::services::{BudgetService, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Statistics subcommands
#[derive(Subcommand)]
pub enum StatsCommands {
    /// Total income, expense and balance
    Summary {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Expense totals per category
    Categories {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Daily income and expense over a range ending today
    Series {
        /// 7d, 1m, 6m or 1y (defaults to the configured range)
        #[arg(short, long)]
        range: Option<StatisticsRange>,
        /// Include days without any transactions
        #[arg(long)]
        all_days: bool,
    },
}

fn filtered(
    storage: &Storage,
    from: Option<String>,
    to: Option<String>,
) -> FinanceResult<Vec<crate::models::Transaction>> {
    let mut filter = TransactionFilter::new();
    filter.start_date = from.as_deref().map(parse_date_arg).transpose()?;
    filter.end_date = to.as_deref().map(parse_date_arg).transpose()?;
    TransactionService::new(storage).list(filter)
}

/// Handle a stats command
pub fn handle_stats_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StatsCommands,
) -> FinanceResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        StatsCommands::Summary { from, to } => {
            let transactions = filtered(storage, from, to)?;
            let summary = calculate_balance_summary(&transactions);
            print!("{}", format_balance_summary(&summary, currency));
        }

        StatsCommands::Categories { from, to } => {
            let transactions = filtered(storage, from, to)?;
            let breakdown = calculate_expense_by_category(&transactions);
            print!("{}", format_expense_breakdown(&breakdown, currency));
        }

        StatsCommands::Series { range, all_days } => {
            let range = range.unwrap_or(settings.default_range);
            let transactions = storage.transactions.get_all()?;
            let points = calculate_time_series(&transactions, range, Local::now().date_naive());

            println!("{}", range.display_name());
            print!(
                "{}",
                format_time_series(&points, currency, &settings.date_format, !all_days)
            );
        }
    }

    Ok(())
}

/// Print insights for the current month
pub fn handle_insights_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let transactions = storage.transactions.get_all()?;
    let budgets = BudgetService::new(storage).list()?;

    let insights = InsightGenerator::new(settings.currency_symbol.as_str()).build_insights(
        &transactions,
        &budgets,
        Local::now().date_naive(),
    );

    print!("{}", format_insights(&insights));
    Ok(())
}
