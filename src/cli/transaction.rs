//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_table, DisplayContext};
use crate::error::{SpendError, SpendResult};
use crate::forms::{DeleteConfirmation, SubmitStatus, TransactionForm};
use crate::models::YearMonth;
use crate::notify::{ConsoleNotifier, Notification, NotificationSink};
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;
use crate::validation::Field;

use super::{finish_submit, today};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name, defaults to the first category
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'n', long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List transactions, newest first
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SpendResult<()> {
    let service = TransactionService::new(storage);
    let category_service = CategoryService::new(storage);
    let ctx = DisplayContext::from_settings(settings);
    let mut notifier = ConsoleNotifier;

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let categories = category_service.list()?;
            let today = today();
            let mut form = TransactionForm::new(&categories, today);

            form.set_field(Field::Amount, amount);
            form.set_field(Field::Description, description);
            if let Some(category) = category {
                form.set_field(Field::Category, category);
            }
            if let Some(date) = date {
                form.set_field(Field::Date, date);
            }

            let status = form.submit(&service, &mut notifier, today);
            finish_submit(status, form.errors(), "Transaction")?;
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let txn = service.find(&id)?;
            let mut form = TransactionForm::for_edit(&txn);

            let changes = [
                (Field::Amount, amount),
                (Field::Description, description),
                (Field::Category, category),
                (Field::Date, date),
            ];
            let mut changed = false;
            for (field, value) in changes {
                if let Some(value) = value {
                    form.set_field(field, value);
                    changed = true;
                }
            }

            if !changed {
                println!("No changes specified for {}", txn.id);
                return Ok(());
            }

            let status = form.submit(&service, &mut notifier, today());
            finish_submit(status, form.errors(), "Transaction")?;
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id)?;
            let mut dialog = DeleteConfirmation::new();
            dialog.open(txn.clone());

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", ctx.date(txn.date));
                println!("  Description: {}", txn.description);
                println!("  Category:    {}", txn.category);
                println!("  Amount:      {}", ctx.money(txn.amount));
                dialog.cancel();
                notifier.notify(Notification::warning(
                    "Deletion not confirmed",
                    "Use --force to confirm deletion",
                ));
                return Ok(());
            }

            if dialog.confirm(&service, &mut notifier) == SubmitStatus::Error {
                return Err(SpendError::Storage("Transaction was not deleted".into()));
            }
        }

        TransactionCommands::List {
            category,
            month,
            limit,
        } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let transactions: Vec<_> = service
                .list()?
                .into_iter()
                .filter(|t| {
                    category
                        .as_deref()
                        .map_or(true, |c| t.category.eq_ignore_ascii_case(c.trim()))
                })
                .filter(|t| month.map_or(true, |m| m.contains(t.date)))
                .take(limit)
                .collect();

            let categories = category_service.list()?;
            print!("{}", format_transaction_table(&transactions, &categories, &ctx));
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM` month argument
fn parse_month(raw: &str) -> SpendResult<YearMonth> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(YearMonth::from_date)
        .map_err(|_| SpendError::Validation(format!("Invalid month '{}'. Use YYYY-MM format.", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-05").unwrap(), YearMonth::new(2024, 5).unwrap());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("May").is_err());
    }
}
