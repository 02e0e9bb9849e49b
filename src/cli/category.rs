//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::SpendResult;
use crate::notify::{ConsoleNotifier, Notification, NotificationSink};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// Remove a category
    ///
    /// Transactions and budgets naming it are kept.
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
        }
        CategoryCommands::Add { name } => {
            let category = service.add(&name)?;
            println!("Created category: {}", category.name);
        }
        CategoryCommands::Remove { name } => {
            let orphaned = service.remove(&name)?;
            println!("Removed category: {}", name.trim());
            if orphaned > 0 {
                ConsoleNotifier::default().notify(Notification::info(
                    "Transactions kept",
                    format!(
                        "{} transaction(s) still use this category and are kept as-is.",
                        orphaned
                    ),
                ));
            }
        }
    }

    Ok(())
}
