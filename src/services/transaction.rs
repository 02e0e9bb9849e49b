//! Transaction service
//!
//! Business rules for adding, replacing and deleting transactions.

use crate::error::{SpendError, SpendResult};
use crate::models::{Transaction, TransactionId};
use crate::storage::Storage;

use super::TransactionStore;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All transactions, newest first
    pub fn list(&self) -> SpendResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Resolve a user-typed identifier to exactly one transaction
    pub fn find(&self, identifier: &str) -> SpendResult<Transaction> {
        let mut matches = self.storage.transactions.find(identifier)?;
        match matches.len() {
            0 => Err(SpendError::transaction_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(SpendError::Validation(format!(
                "Identifier '{}' matches {} transactions; use a longer prefix",
                identifier, n
            ))),
        }
    }

    pub fn count(&self) -> SpendResult<usize> {
        self.storage.transactions.count()
    }
}

impl TransactionStore for TransactionService<'_> {
    fn add(&self, transaction: Transaction) -> SpendResult<()> {
        transaction
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        if self
            .storage
            .categories
            .get_by_name(&transaction.category)?
            .is_none()
        {
            return Err(SpendError::category_not_found(&transaction.category));
        }

        let id = transaction.id;
        self.storage.transactions.upsert(transaction)?;
        self.storage.transactions.save()?;

        tracing::info!(%id, "transaction added");
        Ok(())
    }

    fn edit(&self, transaction: Transaction) -> SpendResult<()> {
        transaction
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        let mut existing = self
            .storage
            .transactions
            .get(transaction.id)?
            .ok_or_else(|| SpendError::transaction_not_found(transaction.id.to_string()))?;

        existing.replace_with(transaction);
        let id = existing.id;
        self.storage.transactions.upsert(existing)?;
        self.storage.transactions.save()?;

        tracing::info!(%id, "transaction updated");
        Ok(())
    }

    fn delete(&self, id: TransactionId) -> SpendResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(SpendError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;

        tracing::info!(%id, "transaction deleted");
        Ok(())
    }
}
