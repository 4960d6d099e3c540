//! Budget goal repository backed by `budgets.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{BudgetGoal, BudgetId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<BudgetGoal>,
}

pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<BudgetId, BudgetGoal>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for goal in file_data.budgets {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let budgets = self.get_all()?;
        write_json_atomic(&self.path, &BudgetData { budgets })
    }

    pub fn get(&self, id: BudgetId) -> Result<Option<BudgetGoal>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All goals ordered by category label
    pub fn get_all(&self) -> Result<Vec<BudgetGoal>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category).then(a.created_at.cmp(&b.created_at)));
        Ok(budgets)
    }

    /// Goal for a category label, compared trimmed and case-insensitively
    pub fn find_by_category(&self, category: &str) -> Result<Option<BudgetGoal>, FinanceError> {
        let wanted = category.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .find(|g| g.category.trim().to_lowercase() == wanted))
    }

    pub fn upsert(&self, goal: BudgetGoal) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: BudgetId) -> Result<bool, FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
