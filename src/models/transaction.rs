//! Transaction model
//!
//! A single recorded income or expense. Amounts are stored as positive
//! values; the sign is implied by [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;

/// Date format used for stored transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds or removes money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Stored representation
    pub fn as_storage(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Parse a stored value; anything unrecognised is treated as an expense
    pub fn from_storage(value: &str) -> Self {
        match value {
            "INCOME" => Self::Income,
            _ => Self::Expense,
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        Self::from_storage(&value)
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        value.as_storage().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Positive amount; see `transaction_type` for direction
    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Category label, matched verbatim against budgets
    pub category: String,

    /// ISO date (`yyyy-mm-dd`); kept as text so malformed rows survive a reload
    pub date: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        transaction_type: TransactionType,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: title.into(),
            description: String::new(),
            amount,
            transaction_type,
            category: category.into(),
            date: date.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with the sign applied (negative for expenses)
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// The date, if it parses as `yyyy-mm-dd`
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the transaction as captured by the form
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::MissingTitle);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(TransactionValidationError::InvalidAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        if self.parsed_date().is_none() {
            return Err(TransactionValidationError::InvalidDate(self.date.clone()));
        }

        Ok(())
    }
}

/// Parse a stored transaction date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("Choose a category for the transaction")]
    MissingCategory,

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),
}
