//! Spending insights
//!
//! Advisory messages comparing the evaluation month with the month before
//! and with each budget. Threshold checks use integer cents so a change of
//! exactly 10% or a usage of exactly 90% is classified exactly.

use serde::Serialize;

use crate::models::{Budget, Money};

use super::period::CategorySpend;

/// Month-over-month change (in percent) that must be exceeded for a trend
pub const TREND_THRESHOLD_PERCENT: i64 = 10;

/// Budget usage (in percent) at which an approaching-limit alert starts
pub const APPROACHING_THRESHOLD_PERCENT: i64 = 90;

/// Budget usage (in percent) at which a budget counts as exceeded
pub const OVER_THRESHOLD_PERCENT: i64 = 100;

/// How an insight should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Success,
    Warning,
    Destructive,
}

/// What an insight is about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InsightKind {
    SpendingIncrease { percent_change: f64 },
    SpendingDecrease { percent_change: f64 },
    OverBudget { category: String, percent_used: Option<f64> },
    ApproachingBudget { category: String, percent_used: f64 },
}

/// An advisory message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: InsightSeverity,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn trend(current: Money, previous: Money) -> Option<Self> {
        if !previous.is_positive() {
            return None;
        }

        let diff = i128::from(current.cents()) - i128::from(previous.cents());
        let scaled_previous = i128::from(previous.cents()) * i128::from(TREND_THRESHOLD_PERCENT);
        let percent_change = diff as f64 / previous.cents() as f64 * 100.0;

        if diff * 100 > scaled_previous {
            Some(Self {
                kind: InsightKind::SpendingIncrease { percent_change },
                severity: InsightSeverity::Warning,
                title: "Spending Increase".into(),
                description: format!(
                    "Your spending is up {:.1}% compared to last month.",
                    percent_change.abs()
                ),
            })
        } else if diff * 100 < -scaled_previous {
            Some(Self {
                kind: InsightKind::SpendingDecrease { percent_change },
                severity: InsightSeverity::Success,
                title: "Spending Decrease".into(),
                description: format!(
                    "Your spending is down {:.1}% compared to last month.",
                    percent_change.abs()
                ),
            })
        } else {
            None
        }
    }

    fn budget_alert(budget: &Budget, spent: Money) -> Option<Self> {
        if budget.amount.is_zero() {
            if !spent.is_positive() {
                return None;
            }
            return Some(Self {
                kind: InsightKind::OverBudget {
                    category: budget.category.clone(),
                    percent_used: None,
                },
                severity: InsightSeverity::Destructive,
                title: "Over Budget".into(),
                description: format!(
                    "You've spent {} on {} against a budget of {}.",
                    spent, budget.category, budget.amount
                ),
            });
        }

        let spent_scaled = i128::from(spent.cents()) * 100;
        let budget_cents = i128::from(budget.amount.cents());
        let percent_used = spent.cents() as f64 / budget.amount.cents() as f64 * 100.0;

        if spent_scaled >= budget_cents * i128::from(OVER_THRESHOLD_PERCENT) {
            Some(Self {
                kind: InsightKind::OverBudget {
                    category: budget.category.clone(),
                    percent_used: Some(percent_used),
                },
                severity: InsightSeverity::Destructive,
                title: "Over Budget".into(),
                description: format!(
                    "You've used {:.0}% of your {} budget this month.",
                    percent_used.floor(),
                    budget.category
                ),
            })
        } else if spent_scaled >= budget_cents * i128::from(APPROACHING_THRESHOLD_PERCENT) {
            Some(Self {
                kind: InsightKind::ApproachingBudget {
                    category: budget.category.clone(),
                    percent_used,
                },
                severity: InsightSeverity::Warning,
                title: "Approaching Budget Limit".into(),
                description: format!(
                    "You've used {:.0}% of your {} budget this month.",
                    percent_used.floor(),
                    budget.category
                ),
            })
        } else {
            None
        }
    }
}

/// Build the ordered insight list
///
/// The trend insight (if any) comes first, followed by one alert per budget
/// at or above the approaching threshold, in budget order.
pub fn spending_insights(
    current: &CategorySpend,
    previous_total: Money,
    budgets: &[Budget],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(trend) = Insight::trend(current.total(), previous_total) {
        insights.push(trend);
    }

    insights.extend(
        budgets
            .iter()
            .filter_map(|budget| Insight::budget_alert(budget, current.get(&budget.category))),
    );

    insights
}
