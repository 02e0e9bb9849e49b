//! Service layer for spendtrack
//!
//! Services add business rules on top of the storage layer and implement the
//! mutation traits the forms submit through.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use transaction::TransactionService;

use crate::error::SpendResult;
use crate::models::{Budget, Transaction, TransactionId};

/// Mutations the transaction form and delete confirmation submit through
pub trait TransactionStore {
    /// Persist a new transaction
    fn add(&self, transaction: Transaction) -> SpendResult<()>;

    /// Replace the stored transaction with the same id
    fn edit(&self, transaction: Transaction) -> SpendResult<()>;

    fn delete(&self, id: TransactionId) -> SpendResult<()>;
}

/// Mutations the budget form submits through
pub trait BudgetStore {
    fn add(&self, budget: Budget) -> SpendResult<()>;

    /// Replace the stored budget with the same id
    fn edit(&self, budget: Budget) -> SpendResult<()>;
}
