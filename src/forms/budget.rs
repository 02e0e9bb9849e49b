//! Budget add/edit form

use crate::models::{Budget, Category};
use crate::notify::{Notification, NotificationSink};
use crate::services::BudgetStore;
use crate::validation::{BudgetInput, Field, FieldErrors};

use super::{SubmitStatus, ERROR_TITLE};

/// State for adding a new budget or changing an existing budget's amount
#[derive(Debug, Clone)]
pub struct BudgetForm {
    input: BudgetInput,
    errors: FieldErrors,
    status: SubmitStatus,
    is_open: bool,
    default_category: String,
}

impl BudgetForm {
    /// Empty add form defaulting to the first category
    pub fn new(categories: &[Category]) -> Self {
        let default_category = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            input: BudgetInput {
                id: None,
                category: default_category.clone(),
                amount: String::new(),
            },
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            is_open: true,
            default_category,
        }
    }

    /// Edit form pre-filled from `budget`; its category is locked
    pub fn for_edit(budget: &Budget) -> Self {
        Self {
            input: BudgetInput::from_budget(budget),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            is_open: true,
            default_category: budget.category.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.input.id.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn input(&self) -> &BudgetInput {
        &self.input
    }

    /// Replace one field's text and clear its error
    ///
    /// Returns `false` when the field cannot be changed: budgets have no
    /// description or date, and an edited budget keeps its category.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match field {
            Field::Amount => self.input.amount = value.into(),
            Field::Category if !self.is_editing() => self.input.category = value.into(),
            _ => return false,
        }
        self.errors.clear(field);
        self.status = self.status.after_edit();
        true
    }

    /// Validate and save the form
    pub fn submit<S, N>(&mut self, store: &S, notifier: &mut N) -> SubmitStatus
    where
        S: BudgetStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        self.errors = self.input.validate();
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            return self.status;
        }

        let budget = match self.input.clone().into_budget() {
            Ok(budget) => budget,
            Err(errors) => {
                self.errors = errors;
                self.status = SubmitStatus::Idle;
                return self.status;
            }
        };

        self.status = SubmitStatus::Submitting;
        let editing = self.is_editing();
        let result = if editing {
            store.edit(budget)
        } else {
            store.add(budget)
        };

        match result {
            Ok(()) if editing => {
                notifier.notify(Notification::success(
                    "Budget updated",
                    "Your budget has been updated successfully.",
                ));
                self.is_open = false;
                self.status = SubmitStatus::Success;
            }
            Ok(()) => {
                notifier.notify(Notification::success(
                    "Budget added",
                    "Your budget has been added successfully.",
                ));
                self.input = BudgetInput {
                    id: None,
                    category: self.default_category.clone(),
                    amount: String::new(),
                };
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save budget");
                notifier.notify(Notification::error(
                    ERROR_TITLE,
                    "Failed to save budget. Please try again.",
                ));
                self.status = SubmitStatus::Error;
            }
        }

        self.status
    }
}
