//! Budget vs. actual comparison
//!
//! Compares each budget against the evaluation month's spending in its
//! category.

use serde::Serialize;

use crate::models::{Budget, Money};

use super::period::CategorySpend;

/// One row of the budget comparison chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budget: Money,
    pub spent: Money,
    /// `budget - spent`, never below zero
    pub remaining: Money,
}

impl BudgetComparison {
    pub fn new(budget: &Budget, spent: Money) -> Self {
        Self {
            category: budget.category.clone(),
            budget: budget.amount,
            spent,
            remaining: budget.amount.saturating_remaining(spent),
        }
    }

    /// Percentage of the budget used, `None` for a zero budget
    pub fn percent_used(&self) -> Option<f64> {
        if self.budget.is_zero() {
            None
        } else {
            Some(self.spent.cents() as f64 / self.budget.cents() as f64 * 100.0)
        }
    }

    /// At or past the budget; a zero budget is over once anything is spent
    pub fn is_over(&self) -> bool {
        if self.budget.is_zero() {
            self.spent.is_positive()
        } else {
            self.spent >= self.budget
        }
    }
}

/// One comparison row per budget, in budget order
pub fn compare_budgets(budgets: &[Budget], spend: &CategorySpend) -> Vec<BudgetComparison> {
    budgets
        .iter()
        .map(|budget| BudgetComparison::new(budget, spend.get(&budget.category)))
        .collect()
}
