//! Transaction repository backed by `transactions.json`

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All transactions, newest date first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions whose stored category equals `category` exactly
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Transaction>, FinanceError> {
        let mut transactions: Vec<_> = {
            let data = self.data.read().map_err(lock_error)?;
            data.values()
                .filter(|t| t.category == category)
                .cloned()
                .collect()
        };
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    pub fn upsert(&self, txn: Transaction) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(txn.id, txn);
        Ok(())
    }

    pub fn upsert_many(&self, txns: Vec<Transaction>) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        for txn in txns {
            data.insert(txn.id, txn);
        }
        Ok(())
    }

    /// Remove a transaction; returns whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }

    /// Distinct stored category labels, sorted
    pub fn categories(&self) -> Result<Vec<String>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        let labels: BTreeSet<String> = data.values().map(|t| t.category.clone()).collect();
        Ok(labels.into_iter().collect())
    }
}

fn sort_newest_first(transactions: &mut [Transaction]) {
    // ISO dates order correctly as strings
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(b.created_at.cmp(&a.created_at))
    });
}
