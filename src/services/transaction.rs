//! Transaction service
//!
//! Validation, persistence and auditing for income/expense entries.

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::category::merged_labels;
use crate::models::transaction::DATE_FORMAT;
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::storage::init::seed_sample_transactions;
use crate::storage::Storage;

pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
///
/// Date bounds are inclusive; rows whose date does not parse are dropped
/// whenever a bound is set.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    /// Exact category label
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if self.transaction_type.is_some_and(|t| t != txn.transaction_type) {
            return false;
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let Some(date) = txn.parsed_date() else {
                return false;
            };
            if self.start_date.is_some_and(|start| date < start)
                || self.end_date.is_some_and(|end| date > end)
            {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// Fields left as `None` keep their current value
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.transaction_type.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: CreateTransactionInput) -> FinanceResult<Transaction> {
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let mut txn = Transaction::new(
            input.title.trim(),
            input.amount,
            input.transaction_type,
            input.category.trim(),
            date.format(DATE_FORMAT).to_string(),
        );
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.title.clone()),
            &txn,
        )?;

        tracing::debug!(id = %txn.id, amount = txn.amount, "transaction created");
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Look up by full UUID, prefixed id (`txn-1a2b3c4d`) or unique id prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        if let Ok(id) = identifier.trim().parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let mut matches: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "'{}' matches {} transactions; use a longer id",
                identifier.trim(),
                n
            ))),
        }
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut transactions = match &filter.category {
            Some(category) => self.storage.transactions.get_by_category(category)?,
            None => self.storage.transactions.get_all()?,
        };

        transactions.retain(|t| filter.matches(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    pub fn update(
        &self,
        id: TransactionId,
        changes: UpdateTransactionInput,
    ) -> FinanceResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();

        if let Some(title) = changes.title {
            txn.title = title.trim().to_string();
        }
        if let Some(description) = changes.description {
            txn.description = description.trim().to_string();
        }
        if let Some(amount) = changes.amount {
            txn.amount = amount;
        }
        if let Some(transaction_type) = changes.transaction_type {
            txn.transaction_type = transaction_type;
        }
        if let Some(category) = changes.category {
            txn.category = category.trim().to_string();
        }
        if let Some(date) = changes.date {
            txn.date = date.format(DATE_FORMAT).to_string();
        }

        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        txn.touch();

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_update(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.title.clone()),
            &before,
            &txn,
        )?;

        Ok(txn)
    }

    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.title.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Predefined labels plus any label already used by a transaction
    pub fn available_categories(&self) -> FinanceResult<Vec<String>> {
        Ok(merged_labels(self.storage.transactions.categories()?))
    }

    /// Seed the sample transactions into an empty table; returns how many
    pub fn ensure_seed_data(&self) -> FinanceResult<usize> {
        let seeded = seed_sample_transactions(self.storage)?;
        if seeded > 0 {
            self.storage.transactions.save()?;
        }
        Ok(seeded)
    }
}
