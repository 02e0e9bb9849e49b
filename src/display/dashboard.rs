//! Dashboard panels: monthly chart, insights and the combined summary

use crate::aggregate::{DashboardSummary, Insight, InsightSeverity, MonthlyTotal};
use crate::models::Category;

use super::budget::format_budget_comparison;
use super::category::format_category_breakdown;
use super::report::{format_bar, format_header, DisplayContext, BAR_WIDTH};
use super::transaction::{format_recent, NO_TRANSACTIONS};

pub const NO_INSIGHTS: &str = "No insights for this month";

/// Format monthly totals as a bar chart, oldest month first
pub fn format_monthly_chart(monthly: &[MonthlyTotal], ctx: &DisplayContext) -> String {
    if monthly.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let max = monthly.iter().map(|m| m.total).max().unwrap_or_default();

    monthly
        .iter()
        .map(|m| {
            format!(
                "{:<8} {} {:>12}\n",
                m.label(),
                format_bar(m.total.as_f64(), max.as_f64(), BAR_WIDTH),
                ctx.money(m.total)
            )
        })
        .collect()
}

fn severity_marker(severity: InsightSeverity) -> &'static str {
    match severity {
        InsightSeverity::Success => "[+]",
        InsightSeverity::Warning => "[!]",
        InsightSeverity::Destructive => "[x]",
    }
}

/// Format insights, one title and description per entry
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return format!("{}\n", NO_INSIGHTS);
    }

    insights
        .iter()
        .map(|i| {
            format!(
                "{} {}\n    {}\n",
                severity_marker(i.severity),
                i.title,
                i.description
            )
        })
        .collect()
}

/// Format every dashboard panel
pub fn format_dashboard(
    summary: &DashboardSummary,
    categories: &[Category],
    ctx: &DisplayContext,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header(&format!(
        "Dashboard for {}",
        summary.current_month.label()
    )));
    output.push_str(&format!(
        "Total spending:  {} across {} transaction(s)\n",
        ctx.money(summary.total),
        summary.transaction_count
    ));
    output.push_str(&format!(
        "This month:      {}\n",
        ctx.money(summary.current_month_total)
    ));
    output.push_str(&format!(
        "Last month:      {}\n",
        ctx.money(summary.previous_month_total)
    ));
    if !summary.top_categories.is_empty() {
        let top: Vec<String> = summary
            .top_categories
            .iter()
            .map(|t| format!("{} ({})", t.category, ctx.money(t.total)))
            .collect();
        output.push_str(&format!("Top categories:  {}\n", top.join(", ")));
    }

    output.push('\n');
    output.push_str(&format_header("Recent transactions"));
    output.push_str(&format_recent(&summary.recent, ctx));

    output.push('\n');
    output.push_str(&format_header("Monthly spending"));
    output.push_str(&format_monthly_chart(&summary.monthly, ctx));

    output.push('\n');
    output.push_str(&format_header("Spending by category"));
    output.push_str(&format_category_breakdown(&summary.category_totals, categories, ctx));

    output.push('\n');
    output.push_str(&format_header("Budget vs. actual"));
    output.push_str(&format_budget_comparison(&summary.budget_comparison, ctx));

    output.push('\n');
    output.push_str(&format_header("Insights"));
    output.push_str(&format_insights(&summary.insights));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, Transaction, YearMonth};
    use chrono::NaiveDate;

    #[test]
    fn test_monthly_chart() {
        let monthly = vec![
            MonthlyTotal {
                month: YearMonth::new(2024, 4).unwrap(),
                total: Money::from_dollars(20),
                transaction_count: 1,
            },
            MonthlyTotal {
                month: YearMonth::new(2024, 5).unwrap(),
                total: Money::from_dollars(80),
                transaction_count: 2,
            },
        ];
        let out = format_monthly_chart(&monthly, &DisplayContext::default());
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].starts_with("Apr 2024"));
        assert!(lines[0].ends_with("$20.00"));
        assert!(lines[1].starts_with("May 2024"));
        assert!(lines[1].contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_empty_panels() {
        let ctx = DisplayContext::default();
        assert_eq!(format_monthly_chart(&[], &ctx), "No transactions yet\n");
        assert_eq!(format_insights(&[]), "No insights for this month\n");
    }

    #[test]
    fn test_dashboard_sections() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let transactions = vec![
            Transaction::new(Money::from_dollars(80), "Groceries", date, "Food"),
            Transaction::new(
                Money::from_dollars(20),
                "Bus pass",
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                "Transportation",
            ),
        ];
        let budgets = vec![Budget::new("Food", Money::from_dollars(70))];
        let summary = DashboardSummary::build(&transactions, &budgets, date, 3);

        let out = format_dashboard(&summary, &[Category::new("Food")], &DisplayContext::default());

        assert!(out.contains("Dashboard for May 2024"));
        assert!(out.contains("Total spending:  $100.00 across 2 transaction(s)"));
        assert!(out.contains("Groceries"));
        assert!(out.contains("Transportation (removed)"));
        assert!(out.contains("[!] Spending Increase"));
        assert!(out.contains("[x] Over Budget"));
    }
}
