//! Budget goal model
//!
//! A monthly spending limit for one category label. Budgets are associated
//! with transactions only by matching category strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category;
use super::ids::BudgetId;

/// A user-configured monthly spending limit per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub id: BudgetId,

    pub category: String,

    /// Monthly limit; zero disables progress tracking for the category
    pub limit: f64,

    /// Icon key from the category catalogue
    #[serde(default = "default_icon_key")]
    pub icon_key: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

fn default_icon_key() -> String {
    category::OTHERS.to_string()
}

impl BudgetGoal {
    pub fn new(category: impl Into<String>, limit: f64, icon_key: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            icon_key: icon_key.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a goal whose icon is looked up from the category label
    pub fn for_category(category: impl Into<String>, limit: f64) -> Self {
        let category = category.into();
        let icon_key = icon_key_for(&category);
        Self::new(category, limit, icon_key)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }

        if !self.limit.is_finite() || self.limit < 0.0 {
            return Err(BudgetValidationError::InvalidLimit(self.limit));
        }

        Ok(())
    }
}

/// Icon key for a category label, falling back to "others"
pub fn icon_key_for(category_label: &str) -> String {
    category::key_for_label(category_label)
        .unwrap_or(category::OTHERS)
        .to_string()
}

/// Budgets seeded on a fresh install
pub fn default_goals() -> Vec<BudgetGoal> {
    vec![
        BudgetGoal::new("Alimentos", 300.0, category::FOOD),
        BudgetGoal::new("Entretenimiento", 120.0, category::ENTERTAINMENT),
        BudgetGoal::new("Social", 150.0, category::SOCIAL),
        BudgetGoal::new("Inversiones", 200.0, category::INVESTMENTS),
    ]
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Budget category is required")]
    MissingCategory,

    #[error("Budget limit must be zero or a positive number, got {0}")]
    InvalidLimit(f64),
}
