//! Transaction add/edit form

use chrono::NaiveDate;

use crate::models::{Category, Transaction};
use crate::notify::{Notification, NotificationSink};
use crate::services::TransactionStore;
use crate::validation::{Field, FieldErrors, TransactionInput, DATE_INPUT_FORMAT};

use super::{SubmitStatus, ERROR_TITLE};

/// State for adding a new transaction or editing an existing one
#[derive(Debug, Clone)]
pub struct TransactionForm {
    input: TransactionInput,
    errors: FieldErrors,
    status: SubmitStatus,
    is_open: bool,
    /// Category a reset form starts with
    default_category: String,
}

impl TransactionForm {
    /// Empty add form dated `today`, defaulting to the first category
    pub fn new(categories: &[Category], today: NaiveDate) -> Self {
        let default_category = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            input: blank_input(&default_category, today),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            is_open: true,
            default_category,
        }
    }

    /// Edit form pre-filled from `transaction`
    pub fn for_edit(transaction: &Transaction) -> Self {
        Self {
            input: TransactionInput::from_transaction(transaction),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            is_open: true,
            default_category: transaction.category.clone(),
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

    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    /// Replace one field's text and clear its error
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Amount => self.input.amount = value,
            Field::Description => self.input.description = value,
            Field::Date => self.input.date = value,
            Field::Category => self.input.category = value,
        }
        self.errors.clear(field);
        self.status = self.status.after_edit();
    }

    /// Validate and save the form
    ///
    /// Invalid input stops before the store is called. A successful add
    /// resets the fields (dated `today`); a successful edit closes the form.
    /// A failed save keeps every field as entered.
    pub fn submit<S, N>(&mut self, store: &S, notifier: &mut N, today: NaiveDate) -> SubmitStatus
    where
        S: TransactionStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        self.errors = self.input.validate();
        if !self.errors.is_empty() {
            tracing::debug!(errors = %self.errors, "transaction form invalid");
            self.status = SubmitStatus::Idle;
            return self.status;
        }

        let transaction = match self.input.clone().into_transaction() {
            Ok(transaction) => transaction,
            Err(errors) => {
                self.errors = errors;
                self.status = SubmitStatus::Idle;
                return self.status;
            }
        };

        self.status = SubmitStatus::Submitting;
        let editing = self.is_editing();
        let result = if editing {
            store.edit(transaction)
        } else {
            store.add(transaction)
        };

        match result {
            Ok(()) if editing => {
                notifier.notify(Notification::success(
                    "Transaction updated",
                    "Your transaction has been updated successfully.",
                ));
                self.is_open = false;
                self.status = SubmitStatus::Success;
            }
            Ok(()) => {
                notifier.notify(Notification::success(
                    "Transaction added",
                    "Your transaction has been added successfully.",
                ));
                self.input = blank_input(&self.default_category, today);
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save transaction");
                notifier.notify(Notification::error(
                    ERROR_TITLE,
                    "Failed to save transaction. Please try again.",
                ));
                self.status = SubmitStatus::Error;
            }
        }

        self.status
    }
}

fn blank_input(category: &str, today: NaiveDate) -> TransactionInput {
    TransactionInput {
        id: None,
        amount: String::new(),
        description: String::new(),
        date: today.format(DATE_INPUT_FORMAT).to_string(),
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::FakeStore;
    use crate::models::Money;
    use crate::notify::{NotificationQueue, NotificationType};
    use crate::validation::{DESCRIPTION_REQUIRED, INVALID_AMOUNT};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn categories() -> Vec<Category> {
        vec![Category::new("Food"), Category::new("Rent")]
    }

    fn filled_form() -> TransactionForm {
        let mut form = TransactionForm::new(&categories(), today());
        form.set_field(Field::Amount, "12.50");
        form.set_field(Field::Description, "Lunch");
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = TransactionForm::new(&categories(), today());
        assert_eq!(form.input().date, "2024-05-20");
        assert_eq!(form.input().category, "Food");
        assert!(form.input().amount.is_empty());
        assert!(!form.is_editing());
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_new_form_without_categories() {
        let form = TransactionForm::new(&[], today());
        assert_eq!(form.input().category, "");
    }

    #[test]
    fn test_invalid_submit_does_not_call_store() {
        let store = FakeStore::default();
        let mut queue = NotificationQueue::new();
        let mut form = TransactionForm::new(&categories(), today());
        form.set_field(Field::Amount, "-5");

        let status = form.submit(&store, &mut queue, today());

        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(form.errors().get(Field::Amount), Some(INVALID_AMOUNT));
        assert_eq!(form.errors().get(Field::Description), Some(DESCRIPTION_REQUIRED));
        assert_eq!(store.calls(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let store = FakeStore::default();
        let mut queue = NotificationQueue::new();
        let mut form = TransactionForm::new(&categories(), today());
        form.submit(&store, &mut queue, today());
        assert_eq!(form.errors().len(), 2);

        form.set_field(Field::Amount, "3");
        assert_eq!(form.errors().get(Field::Amount), None);
        assert_eq!(form.errors().get(Field::Description), Some(DESCRIPTION_REQUIRED));
    }

    #[test]
    fn test_successful_add_resets_fields() {
        let store = FakeStore::default();
        let mut queue = NotificationQueue::new();
        let mut form = filled_form();
        form.set_field(Field::Category, "Rent");
        form.set_field(Field::Date, "2024-05-01");

        let next_day = NaiveDate::from_ymd_opt(2024, 5, 21).unwrap();
        let status = form.submit(&store, &mut queue, next_day);

        assert_eq!(status, SubmitStatus::Success);
        let added = store.added.borrow();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].amount, Money::from_cents(1250));
        assert_eq!(added[0].category, "Rent");

        assert_eq!(form.input().amount, "");
        assert_eq!(form.input().description, "");
        assert_eq!(form.input().date, "2024-05-21");
        assert_eq!(form.input().category, "Food");
        assert!(form.is_open());

        let note = queue.last().unwrap();
        assert_eq!(note.title, "Transaction added");
        assert_eq!(note.message, "Your transaction has been added successfully.");
    }

    #[test]
    fn test_successful_edit_closes_form() {
        let store = FakeStore::default();
        let mut queue = NotificationQueue::new();
        let original = Transaction::new(Money::from_dollars(20), "Taxi", today(), "Transportation");
        let mut form = TransactionForm::for_edit(&original);
        assert_eq!(form.input().amount, "20.00");

        form.set_field(Field::Amount, "25");
        let status = form.submit(&store, &mut queue, today());

        assert_eq!(status, SubmitStatus::Success);
        assert!(!form.is_open());
        let edited = store.edited.borrow();
        assert_eq!(edited[0].id, original.id);
        assert_eq!(edited[0].amount, Money::from_dollars(25));
        assert!(store.added.borrow().is_empty());
        assert_eq!(queue.last().unwrap().title, "Transaction updated");
    }

    #[test]
    fn test_failed_save_keeps_fields() {
        let store = FakeStore::failing();
        let mut queue = NotificationQueue::new();
        let mut form = filled_form();

        let status = form.submit(&store, &mut queue, today());

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(form.input().amount, "12.50");
        assert_eq!(form.input().description, "Lunch");
        assert!(form.errors().is_empty());

        let note = queue.last().unwrap();
        assert_eq!(note.title, "Error");
        assert_eq!(note.message, "Failed to save transaction. Please try again.");
        assert_eq!(note.notification_type, NotificationType::Error);
    }

    #[test]
    fn test_error_status_returns_to_idle_on_edit() {
        let store = FakeStore::failing();
        let mut queue = NotificationQueue::new();
        let mut form = filled_form();
        form.submit(&store, &mut queue, today());

        form.set_field(Field::Description, "Dinner");
        assert_eq!(form.status(), SubmitStatus::Idle);
    }
}
