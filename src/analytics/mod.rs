//! Analytics over in-memory transaction lists
//!
//! Every function here is pure and total: it never mutates its input, performs
//! no I/O, and maps an empty list to an empty or zero result.
//!
//! - `summary`: balance summary, expense-by-category, budget progress
//! - `timeseries`: per-day income/expense buckets for a date range
//! - `insights`: heuristic suggestions for the current month

pub mod insights;
pub mod summary;
pub mod timeseries;

pub use insights::{FinancialInsight, InsightCategory, InsightGenerator};
pub use summary::{
    budget_limits, calculate_balance_summary, calculate_budget_progress,
    calculate_expense_by_category, BalanceSummary, BudgetProgress, CategoryExpense,
    ExpenseBreakdown,
};
pub use timeseries::{
    calculate_time_series, calculate_time_series_between, calculate_time_series_today,
    StatisticsRange, TimeSeriesPoint,
};

/// Format an amount with two decimals followed by the currency symbol
pub fn format_amount(value: f64, currency_symbol: &str) -> String {
    format!("{:.2}{}", value, currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5, "€"), "12.50€");
        assert_eq!(format_amount(-3.456, "$"), "-3.46$");
    }
}
