//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
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

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        tracing::debug!(count = data.len(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), SpendError> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions ordered by date descending
    ///
    /// Ties are broken by creation time, newest first.
    pub fn get_all(&self) -> Result<Vec<Transaction>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Find transactions whose ID matches a user-typed identifier
    pub fn find(&self, identifier: &str) -> Result<Vec<Transaction>, SpendError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches(identifier))
            .collect())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
