//! JSON export of the dashboard view model

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::DashboardSummary;
use crate::error::{SpendError, SpendResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export wrapper
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    pub app_version: &'static str,
    pub dashboard: &'a DashboardSummary,
}

/// Write the dashboard summary as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(
    summary: &DashboardSummary,
    writer: &mut W,
) -> SpendResult<()> {
    let export = DashboardExport {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: Utc::now(),
        app_version: env!("CARGO_PKG_VERSION"),
        dashboard: summary,
    };

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_export_dashboard() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let transactions = vec![Transaction::new(Money::from_dollars(15), "Lunch", date, "Food")];
        let summary = DashboardSummary::build(&transactions, &[], date, 3);

        let mut buffer = Vec::new();
        export_dashboard_json(&summary, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["dashboard"]["total"], 1500);
        assert_eq!(value["dashboard"]["category_totals"][0]["category"], "Food");
    }
}
