//! Category service
//!
//! Manages the category list. Removing a category leaves transactions and
//! budgets that name it untouched.

use crate::error::{SpendError, SpendResult};
use crate::models::Category;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> SpendResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Append a new category
    pub fn add(&self, name: &str) -> SpendResult<Category> {
        let category = Category::new(name.trim());
        category
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        if self.storage.categories.get_by_name(&category.name)?.is_some() {
            return Err(SpendError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        self.storage.categories.push(category.clone())?;
        self.storage.categories.save()?;

        tracing::info!(name = %category.name, "category added");
        Ok(category)
    }

    /// Remove a category by name
    ///
    /// Returns the number of transactions still naming it.
    pub fn remove(&self, name: &str) -> SpendResult<usize> {
        if !self.storage.categories.delete(name)? {
            return Err(SpendError::category_not_found(name));
        }
        self.storage.categories.save()?;

        let orphaned = self
            .storage
            .transactions
            .get_all()?
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(name.trim()))
            .count();

        tracing::info!(name, orphaned, "category removed");
        Ok(orphaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.add("  Travel ").unwrap();
        assert_eq!(category.name, "Travel");
        assert_eq!(service.list().unwrap(), vec![Category::new("Travel")]);
    }

    #[test]
    fn test_duplicate_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.add("Food").unwrap();
        let err = service.add("food").unwrap_err();
        assert!(matches!(err, SpendError::Duplicate { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service.add("   ").unwrap_err().is_validation());
    }

    #[test]
    fn test_remove_leaves_orphans() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        service.add("Food").unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                Money::from_dollars(5),
                "Snack",
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                "Food",
            ))
            .unwrap();

        assert_eq!(service.remove("Food").unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert!(service.remove("Food").unwrap_err().is_not_found());
    }
}
