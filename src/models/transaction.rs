//! Transaction model
//!
//! A transaction is a single dated expense. Its category is stored by name
//! and resolved against the category list when it is displayed or
//! aggregated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount spent, always positive
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Category name (soft reference)
    pub category: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            date,
            category: category.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field with the values of `replacement`
    ///
    /// The id and creation time of `self` are kept.
    pub fn replace_with(&mut self, replacement: Transaction) {
        self.amount = replacement.amount;
        self.description = replacement.description;
        self.date = replacement.date;
        self.category = replacement.category;
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    EmptyDescription,
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Transaction amount must be positive"),
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_dollars(50),
            "Groceries",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Food",
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = sample();
        assert_eq!(txn.amount.cents(), 5000);
        assert_eq!(txn.category, "Food");
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut txn = sample();
        txn.amount = Money::zero();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount)
        );

        let mut txn = sample();
        txn.description = "   ".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        let mut txn = sample();
        txn.category = String::new();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut txn = sample();
        let id = txn.id;
        let created = txn.created_at;

        let replacement = Transaction::new(
            Money::from_dollars(20),
            "Rent share",
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            "Rent",
        );
        txn.replace_with(replacement);

        assert_eq!(txn.id, id);
        assert_eq!(txn.created_at, created);
        assert_eq!(txn.amount, Money::from_dollars(20));
        assert_eq!(txn.category, "Rent");
    }

    #[test]
    fn test_serialization() {
        let txn = sample();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
