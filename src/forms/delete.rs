//! Delete confirmation for a single transaction

use crate::models::Transaction;
use crate::notify::{Notification, NotificationSink};
use crate::services::TransactionStore;

use super::{SubmitStatus, ERROR_TITLE};

/// Confirmation step guarding a transaction delete
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    pending: Option<Transaction>,
    status: SubmitStatus,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation before deleting `transaction`
    pub fn open(&mut self, transaction: Transaction) {
        self.pending = Some(transaction);
        self.status = SubmitStatus::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Transaction> {
        self.pending.as_ref()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Close without deleting anything
    pub fn cancel(&mut self) {
        self.pending = None;
        self.status = SubmitStatus::Idle;
    }

    /// Delete the pending transaction
    ///
    /// The dialog closes whether or not the delete succeeds. Does nothing
    /// when no transaction is pending.
    pub fn confirm<S, N>(&mut self, store: &S, notifier: &mut N) -> SubmitStatus
    where
        S: TransactionStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let Some(transaction) = self.pending.take() else {
            return self.status;
        };

        self.status = SubmitStatus::Submitting;
        match store.delete(transaction.id) {
            Ok(()) => {
                notifier.notify(Notification::success(
                    "Transaction deleted",
                    "Your transaction has been deleted successfully.",
                ));
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %transaction.id, "failed to delete transaction");
                notifier.notify(Notification::error(
                    ERROR_TITLE,
                    "Failed to delete transaction. Please try again.",
                ));
                self.status = SubmitStatus::Error;
            }
        }

        self.status
    }
}
