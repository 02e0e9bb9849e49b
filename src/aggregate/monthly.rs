//! Monthly totals
//!
//! Groups transactions by calendar month for the monthly expenses chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, Transaction, YearMonth};

/// Total spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Money,
    pub transaction_count: usize,
}

impl MonthlyTotal {
    /// Chart label, e.g. "May 2024"
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Sum transactions per calendar month
///
/// Output is ordered by year, then calendar month.
pub fn monthly_totals<'a, I>(transactions: I) -> Vec<MonthlyTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut by_month: BTreeMap<YearMonth, (Money, usize)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_month
            .entry(YearMonth::from_date(txn.date))
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    by_month
        .into_iter()
        .map(|(month, (total, transaction_count))| MonthlyTotal {
            month,
            total,
            transaction_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::overall_total;
    use chrono::NaiveDate;

    fn txn(amount: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            Money::from_dollars(amount),
            "test",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "Food",
        )
    }

    #[test]
    fn test_groups_and_orders_by_calendar_month() {
        let transactions = vec![
            txn(50, 2024, 5, 1),
            txn(30, 2024, 5, 15),
            txn(20, 2024, 4, 1),
        ];

        let totals = monthly_totals(&transactions);
        let view: Vec<_> = totals.iter().map(|t| (t.label(), t.total)).collect();
        assert_eq!(
            view,
            vec![
                ("Apr 2024".to_string(), Money::from_dollars(20)),
                ("May 2024".to_string(), Money::from_dollars(80)),
            ]
        );
        assert_eq!(totals[1].transaction_count, 2);
    }

    #[test]
    fn test_orders_across_years_not_alphabetically() {
        let transactions = vec![
            txn(1, 2025, 1, 3),
            txn(2, 2024, 12, 3),
            txn(3, 2024, 2, 3),
            txn(4, 2024, 8, 3),
        ];

        let labels: Vec<_> = monthly_totals(&transactions)
            .iter()
            .map(MonthlyTotal::label)
            .collect();
        assert_eq!(labels, vec!["Feb 2024", "Aug 2024", "Dec 2024", "Jan 2025"]);
    }

    #[test]
    fn test_sum_matches_overall_total() {
        let transactions: Vec<_> = (1..=40)
            .map(|i| txn(i * 7 % 23 + 1, 2023 + (i as i32 % 3), (i as u32 % 12) + 1, 1))
            .collect();

        let monthly_sum: Money = monthly_totals(&transactions).iter().map(|t| t.total).sum();
        assert_eq!(monthly_sum, overall_total(&transactions));
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Transaction> = Vec::new();
        assert!(monthly_totals(&empty).is_empty());
    }
}
