//! Display formatting for terminal output
//!
//! Renders view models as tables (via `tabled`) and text bar charts. Every
//! formatter returns a `String` so callers decide where it is printed.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_comparison, format_budget_table};
pub use category::{format_category_breakdown, format_category_list};
pub use dashboard::{format_dashboard, format_insights, format_monthly_chart};
pub use report::DisplayContext;
pub use transaction::{format_recent, format_transaction_table};
