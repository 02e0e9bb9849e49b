//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{find_category, Category, Transaction};

use super::report::{truncate, DisplayContext};

pub const NO_TRANSACTIONS: &str = "No transactions yet";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Label a category, marking names that are no longer in the list
pub fn category_label(name: &str, categories: &[Category]) -> String {
    if find_category(categories, name).is_some() {
        name.to_string()
    } else {
        format!("{} (removed)", name)
    }
}

/// Format transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    categories: &[Category],
    ctx: &DisplayContext,
) -> String {
    if transactions.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: ctx.date(txn.date),
        description: truncate(&txn.description, 40),
        category: category_label(&txn.category, categories),
        amount: ctx.money(txn.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the recent transactions panel as compact lines
pub fn format_recent(transactions: &[Transaction], ctx: &DisplayContext) -> String {
    if transactions.is_empty() {
        return format!("  {}\n", NO_TRANSACTIONS);
    }

    transactions
        .iter()
        .map(|txn| {
            format!(
                "  {}  {:<28} {:>12}\n",
                ctx.date(txn.date),
                truncate(&txn.description, 28),
                ctx.money(txn.amount)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_cents(1250),
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Food",
        )
    }

    #[test]
    fn test_empty_table() {
        let out = format_transaction_table(&[], &[], &DisplayContext::default());
        assert_eq!(out, "No transactions yet\n");
    }

    #[test]
    fn test_table_contents() {
        let txn = sample();
        let out = format_transaction_table(
            &[txn.clone()],
            &[Category::new("Food")],
            &DisplayContext::default(),
        );

        assert!(out.contains("Lunch"));
        assert!(out.contains("$12.50"));
        assert!(out.contains("2024-05-01"));
        assert!(out.contains(&txn.id.to_string()));
        assert!(!out.contains("(removed)"));
    }

    #[test]
    fn test_orphaned_category_marked() {
        assert_eq!(category_label("Food", &[]), "Food (removed)");
        assert_eq!(category_label("food", &[Category::new("Food")]), "food");
    }

    #[test]
    fn test_recent_lines() {
        let out = format_recent(&[sample()], &DisplayContext::default());
        assert!(out.contains("2024-05-01"));
        assert!(out.contains("$12.50"));
        assert_eq!(out.lines().count(), 1);
    }
}
