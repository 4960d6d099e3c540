//! Balance, category, time-series and insight views

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_amount, progress_bar};
use crate::analytics::{BalanceSummary, ExpenseBreakdown, FinancialInsight, TimeSeriesPoint};

pub fn format_balance_summary(summary: &BalanceSummary, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Ingresos: {:>14}\n",
        format_amount(summary.total_income, currency)
    ));
    output.push_str(&format!(
        "Gastos:   {:>14}\n",
        format_amount(summary.total_expense, currency)
    ));
    output.push_str(&"-".repeat(24));
    output.push('\n');
    output.push_str(&format!(
        "Balance:  {:>14}\n",
        format_amount(summary.total_balance, currency)
    ));
    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Categories largest first, with each one's share of total spending
pub fn format_expense_breakdown(breakdown: &ExpenseBreakdown, currency: &str) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let total = breakdown.total();
    let rows = breakdown.sorted_desc().into_iter().map(|entry| {
        let share = if total > 0.0 { entry.amount / total } else { 0.0 };
        CategoryRow {
            category: entry.category.clone(),
            amount: format_amount(entry.amount, currency),
            share: format!("{} {:>3.0}%", progress_bar(share, 10), share * 100.0),
        }
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Falls back to ISO when `date_format` has a specifier chrono rejects
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Daily rows; with `skip_empty`, days without movement are left out
pub fn format_time_series(
    points: &[TimeSeriesPoint],
    currency: &str,
    date_format: &str,
    skip_empty: bool,
) -> String {
    let rows: Vec<SeriesRow> = points
        .iter()
        .filter(|p| !skip_empty || p.income != 0.0 || p.expense != 0.0)
        .map(|p| SeriesRow {
            date: format_date(p.date, date_format),
            income: format_amount(p.income, currency),
            expense: format_amount(p.expense, currency),
            net: format_amount(p.net(), currency),
        })
        .collect();

    if rows.is_empty() {
        return "No activity in this range.\n".to_string();
    }

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

pub fn format_insights(insights: &[FinancialInsight]) -> String {
    if insights.is_empty() {
        return "No insights yet. Record some transactions first.\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("[{}] {}\n", insight.category, insight.title));
        output.push_str(&format!("  {}\n\n", insight.message));
    }
    output
}
