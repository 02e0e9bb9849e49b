//! Export CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SpendError, SpendResult};
use crate::export::{export_dashboard_json, export_transactions_csv};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::report::build_dashboard;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },
    /// Export the dashboard summary to JSON
    Dashboard {
        /// Output file path
        output: PathBuf,
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
}

fn create_output(path: &Path) -> SpendResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| SpendError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> SpendResult<()> {
    match cmd {
        ExportCommands::Transactions { output } => {
            let transactions = TransactionService::new(storage).list()?;
            let mut writer = create_output(&output)?;
            let rows = export_transactions_csv(&transactions, &mut writer)?;
            writer.flush()?;
            println!("Exported {} transaction(s) to {}", rows, output.display());
        }
        ExportCommands::Dashboard { output, as_of } => {
            let summary = build_dashboard(storage, settings, as_of.as_deref())?;
            let mut writer = create_output(&output)?;
            export_dashboard_json(&summary, &mut writer)?;
            writer.flush()?;
            println!("Exported dashboard to {}", output.display());
        }
    }

    Ok(())
}
