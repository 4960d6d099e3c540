//! Budget goal and progress tables

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_amount, progress_bar};
use crate::analytics::BudgetProgress;
use crate::models::category::label_for_key;
use crate::models::BudgetGoal;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "")]
    flag: String,
}

pub fn format_budget_list(goals: &[BudgetGoal], currency: &str) -> String {
    if goals.is_empty() {
        return "No budgets configured.\n".to_string();
    }

    let rows = goals.iter().map(|goal| BudgetRow {
        id: goal.id.to_string(),
        category: goal.category.clone(),
        limit: format_amount(goal.limit, currency),
        icon: label_for_key(&goal.icon_key).to_string(),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Progress table; rows at or above `alert_threshold` are flagged
pub fn format_budget_progress(
    progress: &[BudgetProgress],
    currency: &str,
    alert_threshold: f64,
) -> String {
    if progress.is_empty() {
        return "No budgets configured.\n".to_string();
    }

    let rows = progress.iter().map(|p| ProgressRow {
        category: p.category.clone(),
        spent: format_amount(p.spent, currency),
        limit: format_amount(p.limit, currency),
        progress: format!("{} {:>3.0}%", progress_bar(p.progress, 10), p.progress * 100.0),
        flag: if p.is_over() {
            "OVER".to_string()
        } else if p.progress >= alert_threshold {
            "!".to_string()
        } else {
            String::new()
        },
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_list() {
        let goals = vec![BudgetGoal::for_category("Alimentos", 300.0)];
        let output = format_budget_list(&goals, "€");
        assert!(output.contains("Alimentos"));
        assert!(output.contains("300.00€"));
        assert_eq!(format_budget_list(&[], "€"), "No budgets configured.\n");
    }

    #[test]
    fn test_progress_flags() {
        let progress = vec![
            BudgetProgress {
                category: "Social".into(),
                spent: 80.0,
                limit: 100.0,
                progress: 0.8,
            },
            BudgetProgress {
                category: "Entretenimiento".into(),
                spent: 130.0,
                limit: 120.0,
                progress: 1.0,
            },
            BudgetProgress {
                category: "Alimentos".into(),
                spent: 10.0,
                limit: 300.0,
                progress: 10.0 / 300.0,
            },
        ];

        let output = format_budget_progress(&progress, "€", 0.75);
        assert!(output.contains("OVER"));
        assert!(output.contains(" 80%"));
        assert!(output.contains("130.00€"));
    }
}
