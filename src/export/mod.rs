//! Export module for spendtrack
//!
//! - CSV: the transaction list, for spreadsheets
//! - JSON: the dashboard view model, for other tools

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
