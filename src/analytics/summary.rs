//! Balance, per-category and budget aggregates

use serde::Serialize;

use crate::models::{BudgetGoal, Transaction, TransactionType};

/// Aggregate income, expense and net balance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BalanceSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_balance: f64,
}

/// Summed expenses for one category label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: f64,
}

/// Expenses grouped by category, in the order categories were first seen
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ExpenseBreakdown {
    entries: Vec<CategoryExpense>,
}

impl ExpenseBreakdown {
    /// Summed expense for a category (exact, case-sensitive match)
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryExpense> {
        self.entries.iter()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Largest category; the first one seen wins ties
    pub fn top(&self) -> Option<&CategoryExpense> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if current.amount >= entry.amount => Some(current),
            _ => Some(entry),
        })
    }

    /// Entries sorted by amount, largest first
    pub fn sorted_desc(&self) -> Vec<&CategoryExpense> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        sorted
    }
}

/// How much of a category budget has been consumed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
    /// `spent / limit` capped at 1.0; 0.0 when the limit is zero
    pub progress: f64,
}

impl BudgetProgress {
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.limit > 0.0 && self.spent > self.limit
    }
}

pub fn calculate_balance_summary(transactions: &[Transaction]) -> BalanceSummary {
    let total_income = sum_of(transactions, TransactionType::Income);
    let total_expense = sum_of(transactions, TransactionType::Expense);

    BalanceSummary {
        total_income,
        total_expense,
        total_balance: total_income - total_expense,
    }
}

pub fn calculate_expense_by_category(transactions: &[Transaction]) -> ExpenseBreakdown {
    let mut entries: Vec<CategoryExpense> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match entries.iter_mut().find(|e| e.category == txn.category) {
            Some(entry) => entry.amount += txn.amount,
            None => entries.push(CategoryExpense {
                category: txn.category.clone(),
                amount: txn.amount,
            }),
        }
    }

    ExpenseBreakdown { entries }
}

/// One record per `(category, limit)` entry; unbudgeted categories are skipped
pub fn calculate_budget_progress(
    transactions: &[Transaction],
    budgets: &[(String, f64)],
) -> Vec<BudgetProgress> {
    let expenses = calculate_expense_by_category(transactions);

    budgets
        .iter()
        .map(|(category, limit)| {
            let spent = expenses.get(category).unwrap_or(0.0);
            let progress = if *limit > 0.0 {
                (spent / limit).min(1.0)
            } else {
                0.0
            };

            BudgetProgress {
                category: category.clone(),
                spent,
                limit: *limit,
                progress,
            }
        })
        .collect()
}

/// Category → limit pairs; a repeated category keeps its first position and
/// takes the last limit
pub fn budget_limits(goals: &[BudgetGoal]) -> Vec<(String, f64)> {
    let mut limits: Vec<(String, f64)> = Vec::with_capacity(goals.len());
    for goal in goals {
        match limits.iter_mut().find(|(category, _)| *category == goal.category) {
            Some(entry) => entry.1 = goal.limit,
            None => limits.push((goal.category.clone(), goal.limit)),
        }
    }
    limits
}

fn sum_of(transactions: &[Transaction], kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|t| t.transaction_type == kind)
        .map(|t| t.amount)
        .sum()
}
