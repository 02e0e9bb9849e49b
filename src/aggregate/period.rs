//! Current and previous month slices
//!
//! The evaluation date is always passed in. Nothing here reads the clock.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Transaction, YearMonth};

/// Transactions dated within `month`
pub fn in_month(transactions: &[Transaction], month: YearMonth) -> Vec<&Transaction> {
    transactions.iter().filter(|t| month.contains(t.date)).collect()
}

/// Transactions in the same month and year as `as_of`
pub fn current_month(transactions: &[Transaction], as_of: NaiveDate) -> Vec<&Transaction> {
    in_month(transactions, YearMonth::from_date(as_of))
}

/// Transactions in the month before `as_of`
///
/// For a January evaluation date this is December of the previous year.
pub fn previous_month(transactions: &[Transaction], as_of: NaiveDate) -> Vec<&Transaction> {
    in_month(transactions, YearMonth::from_date(as_of).previous())
}

/// Spending per category name within a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySpend(HashMap<String, Money>);

impl CategorySpend {
    /// Build the spend map from any transaction iterator
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut spend: HashMap<String, Money> = HashMap::new();
        for txn in transactions {
            *spend.entry(txn.category.clone()).or_default() += txn.amount;
        }
        Self(spend)
    }

    /// Spend for a category, zero when nothing was spent
    pub fn get(&self, category: &str) -> Money {
        self.0.get(category).copied().unwrap_or_default()
    }

    /// Total across every category
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
