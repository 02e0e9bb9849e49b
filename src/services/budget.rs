//! Budget service
//!
//! Business rules for monthly category budgets.

use crate::error::{SpendError, SpendResult};
use crate::models::{Budget, BudgetId};
use crate::storage::Storage;

use super::BudgetStore;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All budgets in the order they were added
    pub fn list(&self) -> SpendResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Resolve a budget by id prefix or category name
    pub fn find(&self, identifier: &str) -> SpendResult<Budget> {
        let mut matches = self.storage.budgets.find(identifier)?;
        match matches.len() {
            0 => Err(SpendError::budget_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(SpendError::Validation(format!(
                "Identifier '{}' matches {} budgets; use the budget id",
                identifier, n
            ))),
        }
    }

    /// Remove a budget
    pub fn remove(&self, id: BudgetId) -> SpendResult<()> {
        if !self.storage.budgets.delete(id)? {
            return Err(SpendError::budget_not_found(id.to_string()));
        }
        self.storage.budgets.save()?;

        tracing::info!(%id, "budget removed");
        Ok(())
    }
}

impl BudgetStore for BudgetService<'_> {
    fn add(&self, budget: Budget) -> SpendResult<()> {
        budget
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        if self.storage.categories.get_by_name(&budget.category)?.is_none() {
            return Err(SpendError::category_not_found(&budget.category));
        }

        let id = budget.id;
        self.storage.budgets.upsert(budget)?;
        self.storage.budgets.save()?;

        tracing::info!(%id, "budget added");
        Ok(())
    }

    fn edit(&self, budget: Budget) -> SpendResult<()> {
        budget
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        let mut existing = self
            .storage
            .budgets
            .get(budget.id)?
            .ok_or_else(|| SpendError::budget_not_found(budget.id.to_string()))?;

        if existing.category != budget.category {
            return Err(SpendError::Validation(
                "A budget's category cannot be changed".into(),
            ));
        }

        existing.set_amount(budget.amount);
        let id = existing.id;
        self.storage.budgets.upsert(existing)?;
        self.storage.budgets.save()?;

        tracing::info!(%id, "budget updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage.categories.push(Category::new("Food")).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_find_by_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.add(Budget::new("Food", Money::from_dollars(300))).unwrap();

        let found = service.find("food").unwrap();
        assert_eq!(found.amount, Money::from_dollars(300));
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service.add(Budget::new("Travel", Money::from_dollars(10))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_changes_amount_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = Budget::new("Food", Money::from_dollars(300));
        service.add(budget.clone()).unwrap();

        let mut replacement = budget.clone();
        replacement.amount = Money::from_dollars(250);
        service.edit(replacement).unwrap();
        assert_eq!(service.find("Food").unwrap().amount, Money::from_dollars(250));

        let mut renamed = budget;
        renamed.category = "Rent".into();
        assert!(service.edit(renamed).unwrap_err().is_validation());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = Budget::new("Food", Money::from_dollars(300));
        let id = budget.id;
        service.add(budget).unwrap();

        service.remove(id).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(service.remove(id).unwrap_err().is_not_found());
    }
}
