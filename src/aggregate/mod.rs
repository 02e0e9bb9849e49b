//! Aggregations over transactions and budgets
//!
//! Every function here is a pure transform over borrowed input. Functions
//! that depend on "this month" take the evaluation date as a parameter.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod insights;
pub mod monthly;
pub mod period;

pub use budget::{compare_budgets, BudgetComparison};
pub use category::{
    category_totals, overall_total, recent_transactions, top_categories, CategoryTotal,
};
pub use dashboard::DashboardSummary;
pub use insights::{spending_insights, Insight, InsightKind, InsightSeverity};
pub use monthly::{monthly_totals, MonthlyTotal};
pub use period::{current_month, in_month, previous_month, CategorySpend};

use chrono::NaiveDate;

use crate::models::{Budget, Transaction};

/// Number of transactions in the "recent" panel
pub const RECENT_TRANSACTION_COUNT: usize = 3;

/// Number of categories in the summary's top categories panel
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Budget comparison rows for the month containing `as_of`
pub fn budget_comparison(
    transactions: &[Transaction],
    budgets: &[Budget],
    as_of: NaiveDate,
) -> Vec<BudgetComparison> {
    let spend = CategorySpend::from_transactions(current_month(transactions, as_of));
    compare_budgets(budgets, &spend)
}

/// Insights for the month containing `as_of`
pub fn insights_for(
    transactions: &[Transaction],
    budgets: &[Budget],
    as_of: NaiveDate,
) -> Vec<Insight> {
    let current = CategorySpend::from_transactions(current_month(transactions, as_of));
    let previous_total = overall_total(previous_month(transactions, as_of));
    spending_insights(&current, previous_total, budgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn txn(amount: i64, date: &str, category: &str) -> Transaction {
        Transaction::new(
            Money::from_dollars(amount),
            "test",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
        )
    }

    #[test]
    fn test_budget_comparison_uses_evaluation_month_only() {
        let transactions = vec![
            txn(50, "2024-05-01", "Food"),
            txn(30, "2024-05-15", "Food"),
            txn(500, "2024-04-15", "Food"),
        ];
        let budgets = vec![Budget::new("Food", Money::from_dollars(70))];
        let as_of = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let rows = budget_comparison(&transactions, &budgets, as_of);
        assert_eq!(rows[0].spent, Money::from_dollars(80));
        assert_eq!(rows[0].remaining, Money::zero());

        let insights = insights_for(&transactions, &budgets, as_of);
        let titles: Vec<_> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Spending Decrease", "Over Budget"]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let transactions = vec![txn(20, "2024-04-01", "Rent"), txn(50, "2024-05-01", "Food")];
        let before = transactions.clone();

        let _ = category_totals(&transactions);
        let _ = monthly_totals(&transactions);
        let _ = recent_transactions(&transactions, RECENT_TRANSACTION_COUNT);

        assert_eq!(transactions, before);
    }
}
