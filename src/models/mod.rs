//! Core data models for spendtrack
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, budgets, categories, money and months.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::{find_category, Category};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use month::YearMonth;
pub use transaction::Transaction;
