//! CLI command handlers
//!
//! Bridges clap argument parsing with the forms, services and renderers.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_dashboard_command, handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{SpendError, SpendResult};
use crate::forms::SubmitStatus;
use crate::validation::{parse_date, FieldErrors};

/// Today's date from the local clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an optional `--as-of` date, defaulting to today
pub fn parse_as_of(as_of: Option<&str>) -> SpendResult<NaiveDate> {
    match as_of {
        Some(raw) => parse_date(raw).ok_or_else(|| {
            SpendError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", raw))
        }),
        None => Ok(today()),
    }
}

/// Turn a finished form submit into a command result
///
/// Field errors are printed one per line; a failed save has already been
/// reported by the form's notification.
pub(crate) fn finish_submit(
    status: SubmitStatus,
    errors: &FieldErrors,
    what: &str,
) -> SpendResult<()> {
    match status {
        SubmitStatus::Success => Ok(()),
        SubmitStatus::Error => Err(SpendError::Storage(format!("{} was not saved", what))),
        SubmitStatus::Idle | SubmitStatus::Submitting => {
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            Err(SpendError::Validation(errors.to_string()))
        }
    }
}
