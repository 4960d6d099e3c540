//! Budget service
//!
//! One goal per category label. Setting a limit for a label that already has
//! a goal updates that goal in place.

use crate::analytics::{budget_limits, calculate_budget_progress, BudgetProgress};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::budget::icon_key_for;
use crate::models::{BudgetGoal, BudgetId, Transaction};
use crate::storage::init::seed_default_budgets;
use crate::storage::Storage;

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

#[derive(Debug, Clone)]
pub struct BudgetInput {
    pub category: String,
    pub limit: f64,
    /// Looked up from the category label when absent
    pub icon_key: Option<String>,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All goals ordered by category
    pub fn list(&self) -> FinanceResult<Vec<BudgetGoal>> {
        self.storage.budgets.get_all()
    }

    pub fn get(&self, id: BudgetId) -> FinanceResult<Option<BudgetGoal>> {
        self.storage.budgets.get(id)
    }

    /// Look up by id, id prefix or category label
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<BudgetGoal>> {
        if let Ok(id) = identifier.trim().parse::<BudgetId>() {
            return self.storage.budgets.get(id);
        }

        if let Some(goal) = self.storage.budgets.find_by_category(identifier)? {
            return Ok(Some(goal));
        }

        Ok(self
            .storage
            .budgets
            .get_all()?
            .into_iter()
            .find(|g| g.id.matches(identifier)))
    }

    /// Create a goal, or update the goal already set for the category
    pub fn upsert(&self, input: BudgetInput) -> FinanceResult<BudgetGoal> {
        let category = input.category.trim().to_string();
        let icon_key = input
            .icon_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        match self.storage.budgets.find_by_category(&category)? {
            Some(existing) => {
                let mut goal = existing.clone();
                goal.limit = input.limit;
                if let Some(icon_key) = icon_key {
                    goal.icon_key = icon_key;
                }
                goal.validate()
                    .map_err(|e| FinanceError::Validation(e.to_string()))?;
                goal.updated_at = chrono::Utc::now();

                self.storage.budgets.upsert(goal.clone())?;
                self.storage.budgets.save()?;
                self.storage.log_update(
                    EntityType::Budget,
                    goal.id.to_string(),
                    Some(goal.category.clone()),
                    &existing,
                    &goal,
                )?;
                Ok(goal)
            }
            None => {
                let icon_key = icon_key.unwrap_or_else(|| icon_key_for(&category));
                let goal = BudgetGoal::new(category, input.limit, icon_key);
                goal.validate()
                    .map_err(|e| FinanceError::Validation(e.to_string()))?;

                self.storage.budgets.upsert(goal.clone())?;
                self.storage.budgets.save()?;
                self.storage.log_create(
                    EntityType::Budget,
                    goal.id.to_string(),
                    Some(goal.category.clone()),
                    &goal,
                )?;
                Ok(goal)
            }
        }
    }

    pub fn delete(&self, id: BudgetId) -> FinanceResult<BudgetGoal> {
        let goal = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))?;

        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()?;
        self.storage.log_delete(
            EntityType::Budget,
            goal.id.to_string(),
            Some(goal.category.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Seed the default goals into an empty table; returns how many
    pub fn ensure_seed_data(&self) -> FinanceResult<usize> {
        let seeded = seed_default_budgets(self.storage)?;
        if seeded > 0 {
            self.storage.budgets.save()?;
        }
        Ok(seeded)
    }

    /// Progress of every goal against `transactions`
    pub fn progress(&self, transactions: &[Transaction]) -> FinanceResult<Vec<BudgetProgress>> {
        let goals = self.list()?;
        Ok(calculate_budget_progress(transactions, &budget_limits(&goals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::FinancePaths;
    use crate::models::TransactionType;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn set(category: &str, limit: f64) -> BudgetInput {
        BudgetInput {
            category: category.to_string(),
            limit,
            icon_key: None,
        }
    }

    #[test]
    fn test_create_budget_with_icon_lookup() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let goal = service.upsert(set("  Hogar ", 500.0)).unwrap();
        assert_eq!(goal.category, "Hogar");
        assert_eq!(goal.icon_key, "home");

        let custom = service.upsert(set("Mascotas", 40.0)).unwrap();
        assert_eq!(custom.icon_key, "others");
    }

    #[test]
    fn test_upsert_updates_existing_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let first = service.upsert(set("Social", 150.0)).unwrap();
        let second = service.upsert(set("social", 80.0)).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.category, "Social");
        assert_eq!(second.limit, 80.0);
        assert_eq!(service.list().unwrap().len(), 1);

        let ops: Vec<_> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update]);
    }

    #[test]
    fn test_invalid_budgets_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.upsert(set("  ", 10.0)).unwrap_err().is_validation());
        assert!(service.upsert(set("Social", -1.0)).unwrap_err().is_validation());
        assert!(service.upsert(set("Social", f64::INFINITY)).unwrap_err().is_validation());
        assert!(service.upsert(set("Social", 0.0)).is_ok());
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let goal = service.upsert(set("Salud", 60.0)).unwrap();

        assert_eq!(service.find("salud").unwrap().unwrap().id, goal.id);
        assert_eq!(service.find(&goal.id.to_string()).unwrap().unwrap().id, goal.id);

        service.delete(goal.id).unwrap();
        assert!(service.find("Salud").unwrap().is_none());
        assert!(service.delete(goal.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_seed_and_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert_eq!(service.ensure_seed_data().unwrap(), 4);
        assert_eq!(service.ensure_seed_data().unwrap(), 0);

        let txns = vec![
            Transaction::new("Súper", 150.0, TransactionType::Expense, "Alimentos", "2024-10-06"),
            Transaction::new("Cine", 200.0, TransactionType::Expense, "Entretenimiento", "2024-10-07"),
        ];
        let progress = service.progress(&txns).unwrap();

        assert_eq!(progress.len(), 4);
        let food = progress.iter().find(|p| p.category == "Alimentos").unwrap();
        assert_eq!(food.progress, 0.5);
        let fun = progress.iter().find(|p| p.category == "Entretenimiento").unwrap();
        assert_eq!(fun.progress, 1.0);
        let social = progress.iter().find(|p| p.category == "Social").unwrap();
        assert_eq!(social.spent, 0.0);
    }
}
