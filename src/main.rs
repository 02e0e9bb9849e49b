use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendtrack::cli::{
    handle_budget_command, handle_category_command, handle_dashboard_command,
    handle_export_command, handle_report_command, handle_transaction_command,
};
use spendtrack::config::{paths::SpendPaths, settings::Settings};
use spendtrack::display::report::is_valid_date_format;
use spendtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "spendtrack records your expenses, groups them by category, \
                  tracks monthly budgets and summarizes where your money went."
)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(spendtrack::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(spendtrack::cli::BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(spendtrack::cli::CategoryCommands),

    /// Show every dashboard panel
    Dashboard {
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show a single dashboard panel
    #[command(subcommand)]
    Report(spendtrack::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(spendtrack::cli::ExportCommands),

    /// Initialize spendtrack and seed default categories
    Init,

    /// Show or change configuration
    Config {
        /// Currency symbol used when printing amounts
        #[arg(long)]
        currency: Option<String>,
        /// Date display format (strftime, e.g. "%d/%m/%Y")
        #[arg(long)]
        date_format: Option<String>,
        /// Number of transactions in the recent panel
        #[arg(long)]
        recent_count: Option<usize>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("spendtrack=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spendtrack=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = SpendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let command = match cli.command {
        Some(Commands::Init) => {
            println!("Initializing spendtrack at: {}", paths.base_dir().display());
            spendtrack::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'spendtrack category list' to see your categories.");
            return Ok(());
        }
        Some(Commands::Config {
            currency,
            date_format,
            recent_count,
        }) => {
            let changed = currency.is_some() || date_format.is_some() || recent_count.is_some();
            if changed && !paths.is_initialized() {
                bail!("spendtrack is not initialized. Run 'spendtrack init' first.");
            }
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(date_format) = date_format {
                if !is_valid_date_format(&date_format) {
                    bail!("Invalid date format: {}", date_format);
                }
                settings.date_format = date_format;
            }
            if let Some(recent_count) = recent_count {
                settings.recent_count = recent_count;
            }
            if changed {
                settings.save(&paths)?;
                println!("Configuration updated.");
                println!();
            }

            println!("spendtrack Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("spendtrack - Terminal personal-finance tracker");
            println!();
            println!("Run 'spendtrack --help' for usage information.");
            return Ok(());
        }
    };

    if !paths.is_initialized() {
        bail!("spendtrack is not initialized. Run 'spendtrack init' first.");
    }

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&storage, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, cmd)?,
        Commands::Dashboard { as_of } => {
            handle_dashboard_command(&storage, &settings, as_of.as_deref())?
        }
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, &settings, cmd)?,
        Commands::Init | Commands::Config { .. } => {}
    }

    Ok(())
}
