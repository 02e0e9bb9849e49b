//! Form state machines
//!
//! Each form holds raw text input, validates it on submit, calls its store
//! and reports the outcome through a notification sink. A submit runs to
//! completion before returning, so a form cannot be submitted twice at once.

pub mod budget;
pub mod delete;
pub mod transaction;

pub use budget::BudgetForm;
pub use delete::DeleteConfirmation;
pub use transaction::TransactionForm;

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Status after the user changes a field
    ///
    /// A finished submit (either way) falls back to idle.
    pub(crate) fn after_edit(self) -> Self {
        match self {
            Self::Success | Self::Error => Self::Idle,
            other => other,
        }
    }
}

/// Title of every failure notification
pub const ERROR_TITLE: &str = "Error";
