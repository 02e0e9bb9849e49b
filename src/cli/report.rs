//! Dashboard and report CLI commands

use clap::Subcommand;

use crate::aggregate::{
    budget_comparison, category_totals, insights_for, monthly_totals, DashboardSummary,
};
use crate::config::Settings;
use crate::display::{
    format_budget_comparison, format_category_breakdown, format_dashboard, format_insights,
    format_monthly_chart, DisplayContext,
};
use crate::error::SpendResult;
use crate::services::{BudgetService, CategoryService, TransactionService};
use crate::storage::Storage;

use super::parse_as_of;

/// Report subcommands, one per dashboard panel
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending per month
    Monthly,
    /// Spending per category
    Categories,
    /// Budget vs. actual for the evaluation month
    Budgets {
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Month-over-month and budget insights
    Insights {
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
}

/// Build the dashboard summary from storage
pub fn build_dashboard(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<&str>,
) -> SpendResult<DashboardSummary> {
    let as_of = parse_as_of(as_of)?;
    let transactions = TransactionService::new(storage).list()?;
    let budgets = BudgetService::new(storage).list()?;

    Ok(DashboardSummary::build(
        &transactions,
        &budgets,
        as_of,
        settings.recent_count,
    ))
}

/// Print every dashboard panel
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<&str>,
) -> SpendResult<()> {
    let summary = build_dashboard(storage, settings, as_of)?;
    let categories = CategoryService::new(storage).list()?;
    let ctx = DisplayContext::from_settings(settings);

    print!("{}", format_dashboard(&summary, &categories, &ctx));
    Ok(())
}

/// Print a single report panel
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendResult<()> {
    let ctx = DisplayContext::from_settings(settings);
    let transactions = TransactionService::new(storage).list()?;

    let output = match cmd {
        ReportCommands::Monthly => format_monthly_chart(&monthly_totals(&transactions), &ctx),
        ReportCommands::Categories => {
            let categories = CategoryService::new(storage).list()?;
            format_category_breakdown(&category_totals(&transactions), &categories, &ctx)
        }
        ReportCommands::Budgets { as_of } => {
            let as_of = parse_as_of(as_of.as_deref())?;
            let budgets = BudgetService::new(storage).list()?;
            format_budget_comparison(&budget_comparison(&transactions, &budgets, as_of), &ctx)
        }
        ReportCommands::Insights { as_of } => {
            let as_of = parse_as_of(as_of.as_deref())?;
            let budgets = BudgetService::new(storage).list()?;
            format_insights(&insights_for(&transactions, &budgets, as_of))
        }
    };

    print!("{}", output);
    Ok(())
}
