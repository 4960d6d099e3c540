use anyhow::Result;
use clap::{Parser, Subcommand};

use finanzas::cli::{
    handle_audit_command, handle_budget_command, handle_category_command, handle_export_command,
    handle_insights_command, handle_stats_command, handle_transaction_command,
    handle_user_command, BudgetCommands, CategoryCommands, ExportCommands, StatsCommands,
    TransactionCommands, UserCommands,
};
use finanzas::config::{FinancePaths, Settings};
use finanzas::logging::init_tracing;
use finanzas::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "finanzas",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "finanzas records income and expenses, tracks monthly budgets per \
                  category and summarizes where your money goes."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and starter data
    Init,

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Data(DataCommands),
}

/// Commands that read or write the data tables
#[derive(Subcommand)]
enum DataCommands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Balance, category and time-series statistics
    #[command(subcommand)]
    Stats(StatsCommands),

    /// Spending insights for the current month
    Insights,

    /// Account registration and sign-in
    #[command(subcommand)]
    User(UserCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent entries from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("finanzas - terminal personal-finance tracker");
        println!();
        println!("Run 'finanzas --help' for usage information.");
        return Ok(());
    };

    match command {
        // Showing the configuration never seeds data
        Commands::Config => print_config(&paths, &settings),
        Commands::Init => run_init(&paths, &settings)?,
        Commands::Data(cmd) => run(cmd, &paths, &settings)?,
    }

    Ok(())
}

fn print_config(paths: &FinancePaths, settings: &Settings) {
    println!("finanzas configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Seed sample data: {}", settings.seed_sample_data);
    println!("  Default range:    {}", settings.default_range.display_name());
    println!(
        "  Budget alert at:  {:.0}%",
        settings.budget_alert_threshold * 100.0
    );
}

fn run_init(paths: &FinancePaths, settings: &Settings) -> Result<()> {
    let storage = initialize_storage(paths, settings)?;
    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    println!("Initialized finanzas at: {}", paths.base_dir().display());
    println!("  Transactions: {}", storage.transactions.count()?);
    println!("  Budget goals: {}", storage.budgets.count()?);
    println!();
    println!("Run 'finanzas transaction list' to see your transactions.");
    Ok(())
}

fn run(command: DataCommands, paths: &FinancePaths, settings: &Settings) -> Result<()> {
    let storage = initialize_storage(paths, settings)?;

    match command {
        DataCommands::Transaction(cmd) => handle_transaction_command(&storage, settings, cmd)?,
        DataCommands::Budget(cmd) => handle_budget_command(&storage, settings, cmd)?,
        DataCommands::Category(cmd) => handle_category_command(&storage, cmd)?,
        DataCommands::Stats(cmd) => handle_stats_command(&storage, settings, cmd)?,
        DataCommands::Insights => handle_insights_command(&storage, settings)?,
        DataCommands::User(cmd) => handle_user_command(&storage, cmd)?,
        DataCommands::Export(cmd) => handle_export_command(&storage, cmd)?,
        DataCommands::Audit { limit } => handle_audit_command(&storage, limit)?,
    }

    Ok(())
}
