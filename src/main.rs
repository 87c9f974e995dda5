use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::{is_valid_json, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses by date, category and amount, then list them \
                  by category or date range. Data is kept as JSON in the \
                  directory named by EXPENSE_TRACKER_DATA_DIR, or the platform \
                  config directory."
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export expenses as CSV or JSON
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("expense_tracker=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    // `config` still reports on a file that fails to load
    let loaded = storage.load_all();

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            loaded?;
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            loaded?;
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            let expenses_file = paths.expenses_file();
            let file_state = if !storage.is_initialized() {
                "not created yet"
            } else if is_valid_json(&expenses_file) {
                "ok"
            } else {
                "invalid JSON"
            };

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {} ({})", expenses_file.display(), file_state);
            match &loaded {
                Ok(()) => println!("Expenses:       {}", storage.expenses.len()),
                Err(e) => println!(
                    "Expenses:       {} loaded before error: {}",
                    storage.expenses.len(),
                    e
                ),
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            match settings.default_list_limit {
                Some(limit) => println!("  List limit:      {}", limit),
                None => println!("  List limit:      none"),
            }
        }
        None => {
            println!("Expense Tracker - record and review your spending");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses categories' to see the available categories.");
        }
    }

    Ok(())
}
