//! Category totals, overall total and recent transactions
//!
//! Used by the dashboard summary and the category breakdown chart.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{find_category, Category, Money, Transaction};

/// Total spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Category name as stored on the transactions
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

impl CategoryTotal {
    /// Whether the category still exists in the live category list
    ///
    /// Transactions may outlive their category; such names still form their
    /// own bucket.
    pub fn is_known(&self, categories: &[Category]) -> bool {
        find_category(categories, &self.category).is_some()
    }

    /// Share of `overall` taken by this category, in percent
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / overall.cents() as f64 * 100.0
        }
    }
}

/// Sum transactions per category name
///
/// Sorted by total, highest first. Equal totals keep the order in which the
/// category was first seen.
pub fn category_totals<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for txn in transactions {
        match index.get(txn.category.as_str()) {
            Some(&i) => {
                totals[i].total += txn.amount;
                totals[i].transaction_count += 1;
            }
            None => {
                index.insert(txn.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                });
            }
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Sum of every amount; zero for no transactions
pub fn overall_total<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|t| t.amount).sum()
}

/// The `count` most recent transactions, newest date first
///
/// Transactions sharing a date keep their input order.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);
    sorted
}

/// The first `limit` entries of already-sorted category totals
pub fn top_categories(totals: &[CategoryTotal], limit: usize) -> Vec<CategoryTotal> {
    totals.iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(amount: i64, date: &str, category: &str) -> Transaction {
        Transaction::new(
            Money::from_dollars(amount),
            format!("{} purchase", category),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
        )
    }

    #[test]
    fn test_category_totals_example() {
        let transactions = vec![
            txn(50, "2024-05-01", "Food"),
            txn(30, "2024-05-15", "Food"),
            txn(20, "2024-04-01", "Rent"),
        ];

        let totals = category_totals(&transactions);
        let view: Vec<_> = totals
            .iter()
            .map(|t| (t.category.as_str(), t.total))
            .collect();
        assert_eq!(
            view,
            vec![("Food", Money::from_dollars(80)), ("Rent", Money::from_dollars(20))]
        );
        assert_eq!(totals[0].transaction_count, 2);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let transactions = vec![
            txn(10, "2024-05-01", "Books"),
            txn(40, "2024-05-01", "Rent"),
            txn(10, "2024-05-02", "Games"),
            txn(10, "2024-05-03", "Art"),
        ];

        let names: Vec<_> = category_totals(&transactions)
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(names, vec!["Rent", "Books", "Games", "Art"]);
    }

    #[test]
    fn test_category_sum_matches_overall_total() {
        let categories = ["Food", "Rent", "Fun", "Travel", "Gifts"];
        let transactions: Vec<_> = (0..57)
            .map(|i| {
                Transaction::new(
                    Money::from_cents(i * 137 % 9_001 + 1),
                    "x",
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    categories[i as usize % categories.len()],
                )
            })
            .collect();

        let category_sum: Money = category_totals(&transactions).iter().map(|t| t.total).sum();
        assert_eq!(category_sum, overall_total(&transactions));
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let transactions = vec![
            Transaction::new(huge, "a", date, "Food"),
            Transaction::new(huge, "b", date, "Food"),
        ];

        assert_eq!(overall_total(&transactions), Money::from_cents(i64::MAX));
        assert_eq!(category_totals(&transactions)[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_overall_total_empty_is_zero() {
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(overall_total(&empty), Money::zero());
    }

    #[test]
    fn test_recent_transactions() {
        let transactions = vec![
            txn(1, "2024-01-10", "A"),
            txn(2, "2024-03-01", "B"),
            txn(3, "2023-12-31", "C"),
            txn(4, "2024-02-14", "D"),
            txn(5, "2024-03-01", "E"),
        ];

        let recent = recent_transactions(&transactions, 3);
        let names: Vec<_> = recent.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["B", "E", "D"]);
    }

    #[test]
    fn test_recent_transactions_short_input() {
        let transactions = vec![txn(1, "2024-01-10", "A"), txn(2, "2024-03-01", "B")];
        assert_eq!(recent_transactions(&transactions, 3).len(), 2);
        assert!(recent_transactions(&[], 3).is_empty());
    }

    #[test]
    fn test_recent_never_exceeds_three() {
        for size in 0..12 {
            let transactions: Vec<_> = (0..size)
                .map(|i| txn(1, &format!("2024-01-{:02}", (i * 7) % 28 + 1), "A"))
                .collect();
            let recent = recent_transactions(&transactions, 3);
            assert!(recent.len() <= 3);
            assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));
        }
    }

    #[test]
    fn test_unknown_categories_are_flagged() {
        let transactions = vec![txn(5, "2024-05-01", "Deleted"), txn(5, "2024-05-01", "Food")];
        let categories = vec![Category::new("Food")];

        let totals = category_totals(&transactions);
        assert!(!totals[0].is_known(&categories));
        assert!(totals[1].is_known(&categories));
    }

    #[test]
    fn test_percentage_of() {
        let total = CategoryTotal {
            category: "Food".into(),
            total: Money::from_dollars(25),
            transaction_count: 1,
        };
        assert_eq!(total.percentage_of(Money::from_dollars(100)), 25.0);
        assert_eq!(total.percentage_of(Money::zero()), 0.0);
    }
}
