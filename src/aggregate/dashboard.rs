//! Dashboard view model
//!
//! Bundles every panel of the dashboard for a single evaluation date so the
//! display and export layers work from one value.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Budget, Money, Transaction, YearMonth};

use super::{
    category_totals, compare_budgets, current_month, monthly_totals, overall_total,
    previous_month, recent_transactions, spending_insights, top_categories, BudgetComparison,
    CategorySpend, CategoryTotal, Insight, MonthlyTotal, TOP_CATEGORY_COUNT,
};

/// Every derived panel of the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Evaluation date; its month is the "current" month
    pub as_of: NaiveDate,
    pub current_month: YearMonth,
    pub total: Money,
    pub transaction_count: usize,
    pub current_month_total: Money,
    pub previous_month_total: Money,
    pub category_totals: Vec<CategoryTotal>,
    pub top_categories: Vec<CategoryTotal>,
    pub recent: Vec<Transaction>,
    pub monthly: Vec<MonthlyTotal>,
    pub budget_comparison: Vec<BudgetComparison>,
    pub insights: Vec<Insight>,
}

impl DashboardSummary {
    /// Compute every panel from the full transaction and budget lists
    pub fn build(
        transactions: &[Transaction],
        budgets: &[Budget],
        as_of: NaiveDate,
        recent_count: usize,
    ) -> Self {
        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            %as_of,
            "building dashboard summary"
        );

        let current = current_month(transactions, as_of);
        let previous = previous_month(transactions, as_of);
        let current_spend = CategorySpend::from_transactions(current.iter().copied());
        let previous_month_total = overall_total(previous.iter().copied());

        let category_totals = category_totals(transactions);
        let top_categories = top_categories(&category_totals, TOP_CATEGORY_COUNT);

        Self {
            as_of,
            current_month: YearMonth::from_date(as_of),
            total: overall_total(transactions),
            transaction_count: transactions.len(),
            current_month_total: current_spend.total(),
            previous_month_total,
            top_categories,
            category_totals,
            recent: recent_transactions(transactions, recent_count),
            monthly: monthly_totals(transactions),
            budget_comparison: compare_budgets(budgets, &current_spend),
            insights: spending_insights(&current_spend, previous_month_total, budgets),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}
