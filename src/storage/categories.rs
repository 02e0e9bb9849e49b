//! Category repository for JSON storage
//!
//! Manages loading and saving the category list to categories.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{find_category, Category};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for the ordered category list
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *categories = file_data.categories;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    /// All categories in list order
    pub fn get_all(&self) -> Result<Vec<Category>, SpendError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, SpendError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(find_category(&categories, name).cloned())
    }

    /// Append a category to the end of the list
    pub fn push(&self, category: Category) -> Result<(), SpendError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.push(category);
        Ok(())
    }

    /// Remove a category by name, returning whether it existed
    pub fn delete(&self, name: &str) -> Result<bool, SpendError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = categories.len();
        categories.retain(|c| !c.is_named(name));
        Ok(categories.len() != before)
    }

    pub fn count(&self) -> Result<usize, SpendError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_order_kept_across_save() {
        let (temp_dir, repo) = create_test_repo();
        for name in ["Rent", "Food", "Other"] {
            repo.push(Category::new(name)).unwrap();
        }
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        let names: Vec<_> = repo2.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Rent", "Food", "Other"]);
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(Category::new("Food")).unwrap();

        assert!(repo.get_by_name("food").unwrap().is_some());
        assert!(repo.get_by_name("Travel").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(Category::new("Food")).unwrap();

        assert!(repo.delete("FOOD").unwrap());
        assert!(!repo.delete("Food").unwrap());
    }
}
