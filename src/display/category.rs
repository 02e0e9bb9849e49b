//! Category list and breakdown chart

use crate::aggregate::CategoryTotal;
use crate::models::{Category, Money};

use super::report::{format_bar, format_percentage, DisplayContext, BAR_WIDTH};
use super::transaction::{category_label, NO_TRANSACTIONS};

/// Format the category list, one name per line
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories defined\n".to_string();
    }

    categories
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}. {}\n", i + 1, c.name))
        .collect()
}

/// Format category totals as a bar chart with each category's share
pub fn format_category_breakdown(
    totals: &[CategoryTotal],
    categories: &[Category],
    ctx: &DisplayContext,
) -> String {
    if totals.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let overall: Money = totals.iter().map(|t| t.total).sum();
    let max = totals.iter().map(|t| t.total).max().unwrap_or_default();

    let labels: Vec<String> = totals
        .iter()
        .map(|t| category_label(&t.category, categories))
        .collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    totals
        .iter()
        .zip(&labels)
        .map(|(total, label)| {
            format!(
                "{:<width$} {} {:>12} {:>6}\n",
                label,
                format_bar(total.total.as_f64(), max.as_f64(), BAR_WIDTH),
                ctx.money(total.total),
                format_percentage(total.percentage_of(overall)),
                width = width
            )
        })
        .collect()
}
