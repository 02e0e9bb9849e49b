//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_table, DisplayContext};
use crate::error::SpendResult;
use crate::forms::BudgetForm;
use crate::models::Category;
use crate::notify::ConsoleNotifier;
use crate::services::{BudgetService, CategoryService};
use crate::storage::Storage;
use crate::validation::Field;

use super::finish_submit;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly budget for a category
    Set {
        /// Category name
        category: String,
        /// Monthly amount (e.g., "300")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Change a budget's monthly amount
    Edit {
        /// Budget ID or category name
        budget: String,
        /// New monthly amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Remove a budget
    Remove {
        /// Budget ID or category name
        budget: String,
    },
    /// List budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendResult<()> {
    let service = BudgetService::new(storage);
    let ctx = DisplayContext::from_settings(settings);
    let mut notifier = ConsoleNotifier;

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let categories: Vec<Category> = CategoryService::new(storage).list()?;
            let mut form = BudgetForm::new(&categories);
            form.set_field(Field::Category, category);
            form.set_field(Field::Amount, amount);

            let status = form.submit(&service, &mut notifier);
            finish_submit(status, form.errors(), "Budget")?;
        }

        BudgetCommands::Edit { budget, amount } => {
            let existing = service.find(&budget)?;
            let mut form = BudgetForm::for_edit(&existing);
            form.set_field(Field::Amount, amount);

            let status = form.submit(&service, &mut notifier);
            finish_submit(status, form.errors(), "Budget")?;
        }

        BudgetCommands::Remove { budget } => {
            let existing = service.find(&budget)?;
            service.remove(existing.id)?;
            println!("Removed budget: {}", existing);
        }

        BudgetCommands::List => {
            print!("{}", format_budget_table(&service.list()?, &ctx));
        }
    }

    Ok(())
}
