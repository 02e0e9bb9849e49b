//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. Budgets keep the
//! order they were added in, which is the order the comparison chart uses.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Budget, BudgetId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = file_data.budgets;
        tracing::debug!(count = budgets.len(), "loaded budgets");
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let budgets = self.get_all()?;
        write_json_atomic(&self.path, &BudgetData { budgets })
    }

    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, SpendError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.id == id).cloned())
    }

    /// All budgets in insertion order
    pub fn get_all(&self) -> Result<Vec<Budget>, SpendError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Find budgets by ID prefix or by category name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Result<Vec<Budget>, SpendError> {
        let needle = identifier.trim();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|b| b.id.matches(needle) || b.category.eq_ignore_ascii_case(needle))
            .collect())
    }

    /// Replace the budget with the same ID, or append a new one
    pub fn upsert(&self, budget: Budget) -> Result<(), SpendError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(existing) => *existing = budget,
            None => budgets.push(budget),
        }
        Ok(())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, SpendError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = budgets.len();
        budgets.retain(|b| b.id != id);
        Ok(budgets.len() != before)
    }

    pub fn count(&self) -> Result<usize, SpendError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}
