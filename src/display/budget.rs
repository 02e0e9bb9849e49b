//! Budget list and budget-vs-actual formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::aggregate::BudgetComparison;
use crate::models::Budget;

use super::report::{format_bar, format_percentage, DisplayContext, BAR_WIDTH};

pub const NO_BUDGET_DATA: &str = "No budget data available. Set budgets to see comparison.";
pub const NO_BUDGETS: &str = "No budgets set";

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly budget")]
    amount: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Format the budget list as a table
pub fn format_budget_table(budgets: &[Budget], ctx: &DisplayContext) -> String {
    if budgets.is_empty() {
        return format!("{}\n", NO_BUDGETS);
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        category: b.category.clone(),
        amount: ctx.money(b.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the budget comparison as a table followed by usage bars
pub fn format_budget_comparison(rows: &[BudgetComparison], ctx: &DisplayContext) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_BUDGET_DATA);
    }

    let table_rows = rows.iter().map(|row| ComparisonRow {
        category: row.category.clone(),
        budget: ctx.money(row.budget),
        spent: ctx.money(row.spent),
        remaining: ctx.money(row.remaining),
        used: row
            .percent_used()
            .map(format_percentage)
            .unwrap_or_else(|| "-".to_string()),
    });

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    let mut output = format!("{}\n", table);

    let name_width = rows.iter().map(|r| r.category.chars().count()).max().unwrap_or(0);
    for row in rows {
        let bar = format_bar(row.spent.as_f64(), row.budget.as_f64(), BAR_WIDTH);
        let marker = if row.is_over() { " over" } else { "" };
        output.push_str(&format!(
            "{:<width$} {}{}\n",
            row.category,
            bar,
            marker,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_comparison_message() {
        let out = format_budget_comparison(&[], &DisplayContext::default());
        assert_eq!(out, "No budget data available. Set budgets to see comparison.\n");
    }

    #[test]
    fn test_comparison_output() {
        let budget = Budget::new("Food", Money::from_dollars(70));
        let row = BudgetComparison::new(&budget, Money::from_dollars(80));
        let out = format_budget_comparison(&[row], &DisplayContext::default());

        assert!(out.contains("$70.00"));
        assert!(out.contains("$80.00"));
        assert!(out.contains("$0.00"));
        assert!(out.contains("114%"));
        assert!(out.contains(" over"));
    }

    #[test]
    fn test_budget_table() {
        let budget = Budget::new("Rent", Money::from_dollars(1200));
        let out = format_budget_table(&[budget], &DisplayContext::default());
        assert!(out.contains("Rent"));
        assert!(out.contains("$1200.00"));

        assert_eq!(format_budget_table(&[], &DisplayContext::default()), "No budgets set\n");
    }
}
