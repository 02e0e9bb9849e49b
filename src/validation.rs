//! Input validation for transaction and budget records
//!
//! Form input arrives as raw text. Validation is a pure function of that
//! text and returns a map of field to message; an empty map means the record
//! can be submitted.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::models::{Budget, BudgetId, Money, Transaction, TransactionId};

pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const CATEGORY_REQUIRED: &str = "Category is required";

/// Date format accepted by the date field
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A form field that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Description,
    Date,
    Category,
}

impl Field {
    /// Field name as shown next to its message
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Date => "date",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Field-scoped validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the message for one field, e.g. after the user edits it
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Which kind of record is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Transaction,
    Budget,
}

/// Raw text entered for a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    /// Set when editing an existing transaction
    pub id: Option<TransactionId>,
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category: String,
}

impl TransactionInput {
    /// Pre-fill the input from an existing transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            id: Some(txn.id),
            amount: format!("{}.{:02}", txn.amount.dollars(), txn.amount.cents_part()),
            description: txn.description.clone(),
            date: txn.date.format(DATE_INPUT_FORMAT).to_string(),
            category: txn.category.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if parse_positive_amount(&self.amount).is_none() {
            errors.insert(Field::Amount, INVALID_AMOUNT);
        }

        if self.description.trim().is_empty() {
            errors.insert(Field::Description, DESCRIPTION_REQUIRED);
        }

        if self.date.trim().is_empty() {
            errors.insert(Field::Date, DATE_REQUIRED);
        } else if parse_date(&self.date).is_none() {
            errors.insert(Field::Date, INVALID_DATE);
        }

        if self.category.trim().is_empty() {
            errors.insert(Field::Category, CATEGORY_REQUIRED);
        }

        errors
    }

    /// Convert a valid input into a transaction record
    ///
    /// The description is stored as typed; the category is trimmed.
    pub fn into_transaction(self) -> Result<Transaction, FieldErrors> {
        let errors = self.validate();
        let (Some(amount), Some(date)) = (parse_positive_amount(&self.amount), parse_date(&self.date))
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut txn = Transaction::new(amount, self.description, date, self.category.trim());
        if let Some(id) = self.id {
            txn.id = id;
        }
        Ok(txn)
    }
}

/// Raw text entered for a budget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetInput {
    /// Set when editing an existing budget
    pub id: Option<BudgetId>,
    pub category: String,
    pub amount: String,
}

impl BudgetInput {
    /// Pre-fill the input from an existing budget
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            id: Some(budget.id),
            category: budget.category.clone(),
            amount: format!("{}.{:02}", budget.amount.dollars(), budget.amount.cents_part()),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if parse_positive_amount(&self.amount).is_none() {
            errors.insert(Field::Amount, INVALID_AMOUNT);
        }

        if self.category.trim().is_empty() {
            errors.insert(Field::Category, CATEGORY_REQUIRED);
        }

        errors
    }

    /// Convert a valid input into a budget record
    pub fn into_budget(self) -> Result<Budget, FieldErrors> {
        let errors = self.validate();
        let Some(amount) = parse_positive_amount(&self.amount) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut budget = Budget::new(self.category.trim(), amount);
        if let Some(id) = self.id {
            budget.id = id;
        }
        Ok(budget)
    }
}

/// A record of either kind, as submitted by a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordInput {
    Transaction(TransactionInput),
    Budget(BudgetInput),
}

impl RecordInput {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Transaction(_) => RecordKind::Transaction,
            Self::Budget(_) => RecordKind::Budget,
        }
    }
}

/// Validate a record according to its kind
pub fn validate(record: &RecordInput) -> FieldErrors {
    match record {
        RecordInput::Transaction(input) => input.validate(),
        RecordInput::Budget(input) => input.validate(),
    }
}

/// Parse an amount that must be strictly greater than zero
///
/// Amounts above [`Money::MAX_AMOUNT`] are rejected.
pub fn parse_positive_amount(raw: &str) -> Option<Money> {
    Money::parse(raw)
        .ok()
        .filter(|amount| amount.is_positive() && *amount <= Money::MAX_AMOUNT)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}
