//! Heuristic suggestions derived from the month's transactions and budgets

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::format_amount;
use super::summary::{
    budget_limits, calculate_balance_summary, calculate_budget_progress,
    calculate_expense_by_category,
};
use crate::models::{BudgetGoal, Transaction};

/// Progress ratio from which a budget raises an alert
pub const BUDGET_ALERT_RATIO: f64 = 0.75;

const SAVINGS_PROJECTION_MONTHS: f64 = 3.0;
const INVESTMENT_SHARE: f64 = 0.2;
const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Savings,
    Expense,
    Budget,
    Opportunity,
    Warning,
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Savings => "Ahorro",
            Self::Expense => "Gasto",
            Self::Budget => "Presupuesto",
            Self::Opportunity => "Oportunidad",
            Self::Warning => "Aviso",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialInsight {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: InsightCategory,
}

impl FinancialInsight {
    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: InsightCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            category,
        }
    }
}

/// Builds insights, formatting amounts with a fixed currency symbol
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    currency_symbol: String,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new("€")
    }
}

impl InsightGenerator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, &self.currency_symbol)
    }

    /// Insights for the month containing `reference`
    ///
    /// Transactions whose date does not parse are counted toward that month.
    /// When the month has no transactions at all, the whole list is used.
    pub fn build_insights(
        &self,
        transactions: &[Transaction],
        budgets: &[BudgetGoal],
        reference: NaiveDate,
    ) -> Vec<FinancialInsight> {
        if transactions.is_empty() {
            return Vec::new();
        }

        let month = month_transactions(transactions, reference);
        let summary = calculate_balance_summary(&month);
        let net = summary.total_balance;

        let mut insights = Vec::new();

        if net >= 0.0 {
            insights.push(FinancialInsight::new(
                "savings",
                "Ritmo de ahorro positivo",
                format!(
                    "Podrías ahorrar aproximadamente {} en los próximos 3 meses si mantienes el ritmo actual.",
                    self.amount(net * SAVINGS_PROJECTION_MONTHS)
                ),
                InsightCategory::Savings,
            ));
        } else {
            insights.push(FinancialInsight::new(
                "overspend",
                "Gasto por encima de los ingresos",
                format!(
                    "Estás gastando {} más de lo que ingresas este mes. Ajusta tus presupuestos para evitar pérdidas.",
                    self.amount(net.abs())
                ),
                InsightCategory::Warning,
            ));
        }

        if let Some(top) = calculate_expense_by_category(&month).top() {
            insights.push(FinancialInsight::new(
                "topCategory",
                format!("Mayor gasto en {}", top.category),
                format!(
                    "Has invertido {} en {} este mes. Considera establecer un límite específico.",
                    self.amount(top.amount),
                    top.category
                ),
                InsightCategory::Expense,
            ));
        }

        if !budgets.is_empty() {
            let progress = calculate_budget_progress(&month, &budget_limits(budgets));
            for budget in progress.iter().filter(|b| b.progress >= BUDGET_ALERT_RATIO) {
                let message = if budget.progress >= 1.0 {
                    format!(
                        "Has superado el 100% del límite ({}). Ajusta tus gastos cuanto antes.",
                        self.amount(budget.limit)
                    )
                } else {
                    format!(
                        "Ya consumiste el {}% de tu meta mensual en {}. Reduce el ritmo para evitar sobrepasarla.",
                        (budget.progress * 100.0) as i64,
                        budget.category
                    )
                };

                insights.push(FinancialInsight::new(
                    format!("budget-{}", budget.category),
                    format!("Alerta en {}", budget.category),
                    message,
                    InsightCategory::Budget,
                ));
            }
        }

        if net > 0.0 {
            insights.push(FinancialInsight::new(
                "investment",
                "Multiplica tus ahorros",
                format!(
                    "Si destinas el 20% de tu ahorro mensual a inversiones podrías sumar cerca de {} en un año.",
                    self.amount(net * INVESTMENT_SHARE * MONTHS_PER_YEAR)
                ),
                InsightCategory::Opportunity,
            ));
        }

        let mut seen = HashSet::new();
        insights.retain(|insight| seen.insert(insight.id.clone()));
        insights
    }
}

fn month_transactions(transactions: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    let target = (reference.year(), reference.month());

    let month: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| {
            txn.parsed_date()
                .map(|d| (d.year(), d.month()) == target)
                .unwrap_or(true)
        })
        .cloned()
        .collect();

    if month.is_empty() {
        transactions.to_vec()
    } else {
        month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(amount: f64, kind: TransactionType, category: &str, when: &str) -> Transaction {
        Transaction::new("t", amount, kind, category, when)
    }

    fn ids(insights: &[FinancialInsight]) -> Vec<&str> {
        insights.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_no_transactions_no_insights() {
        let generator = InsightGenerator::default();
        let budgets = vec![BudgetGoal::for_category("Social", 10.0)];
        assert!(generator.build_insights(&[], &budgets, date(2024, 10, 9)).is_empty());
    }

    #[test]
    fn test_positive_month() {
        let txns = vec![
            txn(1000.0, TransactionType::Income, "Salario", "2024-10-01"),
            txn(50.0, TransactionType::Expense, "Entretenimiento", "2024-10-02"),
            txn(40.0, TransactionType::Expense, "Social", "2024-10-03"),
        ];
        let insights = InsightGenerator::default().build_insights(&txns, &[], date(2024, 10, 15));

        assert_eq!(ids(&insights), vec!["savings", "topCategory", "investment"]);
        assert!(insights[0].message.contains("2730.00€"));
        assert_eq!(insights[1].title, "Mayor gasto en Entretenimiento");
        assert!(insights[1].message.contains("50.00€"));
        assert!(insights[2].message.contains("2184.00€"));
        assert_eq!(insights[2].category, InsightCategory::Opportunity);
    }

    #[test]
    fn test_overspend_month() {
        let txns = vec![
            txn(100.0, TransactionType::Income, "Salario", "2024-10-01"),
            txn(150.0, TransactionType::Expense, "Hogar", "2024-10-02"),
        ];
        let insights = InsightGenerator::new("$").build_insights(&txns, &[], date(2024, 10, 15));

        assert_eq!(ids(&insights), vec!["overspend", "topCategory"]);
        assert_eq!(insights[0].category, InsightCategory::Warning);
        assert!(insights[0].message.contains("50.00$"));
    }

    #[test]
    fn test_zero_net_saves_without_investment() {
        let txns = vec![
            txn(80.0, TransactionType::Income, "Salario", "2024-10-01"),
            txn(80.0, TransactionType::Expense, "Hogar", "2024-10-02"),
        ];
        let insights = InsightGenerator::default().build_insights(&txns, &[], date(2024, 10, 15));
        assert_eq!(ids(&insights), vec!["savings", "topCategory"]);
        assert!(insights[0].message.contains("0.00€"));
    }

    #[test]
    fn test_budget_alerts() {
        let txns = vec![
            txn(1000.0, TransactionType::Income, "Salario", "2024-10-01"),
            txn(80.0, TransactionType::Expense, "Social", "2024-10-02"),
            txn(130.0, TransactionType::Expense, "Entretenimiento", "2024-10-03"),
            txn(10.0, TransactionType::Expense, "Alimentos", "2024-10-03"),
        ];
        let budgets = vec![
            BudgetGoal::for_category("Social", 100.0),
            BudgetGoal::for_category("Entretenimiento", 120.0),
            BudgetGoal::for_category("Alimentos", 300.0),
        ];

        let insights =
            InsightGenerator::default().build_insights(&txns, &budgets, date(2024, 10, 20));
        assert_eq!(
            ids(&insights),
            vec![
                "savings",
                "topCategory",
                "budget-Social",
                "budget-Entretenimiento",
                "investment"
            ]
        );

        let social = &insights[2];
        assert_eq!(social.title, "Alerta en Social");
        assert!(social.message.contains("80%"));

        let entertainment = &insights[3];
        assert!(entertainment.message.contains("100%"));
        assert!(entertainment.message.contains("120.00€"));
    }

    #[test]
    fn test_other_months_are_ignored_when_reference_month_has_data() {
        let txns = vec![
            txn(500.0, TransactionType::Income, "Salario", "2024-09-01"),
            txn(20.0, TransactionType::Expense, "Social", "2024-10-02"),
        ];
        let insights = InsightGenerator::default().build_insights(&txns, &[], date(2024, 10, 15));
        assert_eq!(insights[0].id, "overspend");
        assert!(insights[0].message.contains("20.00€"));
    }

    #[test]
    fn test_falls_back_to_all_transactions() {
        let txns = vec![
            txn(500.0, TransactionType::Income, "Salario", "2024-09-01"),
            txn(20.0, TransactionType::Expense, "Social", "2024-08-02"),
        ];
        let insights = InsightGenerator::default().build_insights(&txns, &[], date(2024, 12, 1));
        assert_eq!(insights[0].id, "savings");
        assert!(insights[0].message.contains("1440.00€"));
    }

    #[test]
    fn test_unparseable_dates_count_toward_reference_month() {
        let txns = vec![
            txn(500.0, TransactionType::Income, "Salario", "2024-09-01"),
            txn(30.0, TransactionType::Expense, "Social", "sin fecha"),
        ];
        let insights = InsightGenerator::default().build_insights(&txns, &[], date(2024, 10, 15));
        assert_eq!(ids(&insights), vec!["overspend", "topCategory"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let txns = vec![
            txn(10.0, TransactionType::Expense, "Social", "2024-10-02"),
            txn(10.0, TransactionType::Income, "Salario", "2024-10-02"),
        ];
        let budgets = vec![
            BudgetGoal::for_category("Social", 5.0),
            BudgetGoal::for_category("Social", 8.0),
        ];
        let insights =
            InsightGenerator::default().build_insights(&txns, &budgets, date(2024, 10, 2));

        let unique: HashSet<_> = insights.iter().map(|i| &i.id).collect();
        assert_eq!(unique.len(), insights.len());
        assert_eq!(
            insights.iter().filter(|i| i.id == "budget-Social").count(),
            1
        );
    }
}
