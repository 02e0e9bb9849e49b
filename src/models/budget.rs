//! Budget model
//!
//! A budget is a monthly spending cap for one category. The comparison view
//! assumes one budget per category but nothing enforces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A monthly cap on spending in a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category name this budget caps
    pub category: String,

    /// Monthly cap
    pub amount: Money,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the monthly cap
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    EmptyCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Budget amount must be positive"),
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Food", Money::from_dollars(70));
        assert_eq!(budget.category, "Food");
        assert_eq!(budget.amount.cents(), 7000);
        assert!(budget.validate().is_ok());
        assert_eq!(budget.to_string(), "Food: $70.00 per month");
    }

    #[test]
    fn test_validation() {
        let budget = Budget::new("Food", Money::zero());
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );

        let budget = Budget::new(" ", Money::from_dollars(10));
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_set_amount() {
        let mut budget = Budget::new("Food", Money::from_dollars(70));
        budget.set_amount(Money::from_dollars(90));
        assert_eq!(budget.amount, Money::from_dollars(90));
        assert!(budget.updated_at >= budget.created_at);
    }
}
