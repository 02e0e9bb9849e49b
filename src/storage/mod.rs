//! Storage layer for spendtrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::config::paths::SpendPaths;
use crate::error::SpendError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendPaths) -> Result<Self, SpendError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SpendError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SpendError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
