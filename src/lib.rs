//! spendtrack - Terminal personal-finance tracker
//!
//! Record expenses, group them by category, set monthly budgets, and view
//! aggregate summaries: monthly totals, category breakdowns, budget vs.
//! actual, and month-over-month insights.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets, categories)
//! - `validation`: Field-level checks for user input
//! - `aggregate`: Pure derivations over transactions and budgets
//! - `storage`: JSON file storage layer
//! - `services`: Business rules and the mutation traits forms submit through
//! - `notify`: Notifications emitted by forms
//! - `forms`: Form state machines for add/edit/delete
//! - `display`: Terminal tables and charts
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers for the `spendtrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrack::aggregate::DashboardSummary;
//! use spendtrack::config::SpendPaths;
//! use spendtrack::storage::Storage;
//!
//! let mut storage = Storage::new(SpendPaths::new()?)?;
//! storage.load_all()?;
//! let summary = DashboardSummary::build(
//!     &storage.transactions.get_all()?,
//!     &storage.budgets.get_all()?,
//!     chrono::Local::now().date_naive(),
//!     3,
//! );
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod notify;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{SpendError, SpendResult};
