use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use housesplit::cli::{
    handle_balances_command, handle_demo_command, handle_expense_command, handle_ledger_command,
    handle_plan_command, handle_report_command, handle_settle_command, handle_spending_command,
    handle_split_command, DemoArgs, ExpenseArgs, LedgerArgs, ReportArgs, SettleArgs, SplitArgs,
};
use housesplit::config::{paths::HouseholdPaths, settings::Settings};
use housesplit::storage::SnapshotRepository;

#[derive(Parser)]
#[command(
    name = "housesplit",
    author = "Kaylee Beyene",
    version,
    about = "Shared household expenses, balances and who pays whom",
    long_about = "housesplit reads a household snapshot of expenses, splits and \
                  settlements, works out what each member is owed or owes, and \
                  suggests a short list of payments that settles everyone up."
)]
struct Cli {
    /// Household snapshot file (defaults to the data directory)
    #[arg(short, long, global = true, env = "HOUSESPLIT_FILE")]
    file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what each member is owed or owes
    #[command(alias = "bal")]
    Balances {
        /// Household name or ID (defaults to the first household)
        #[arg(long)]
        household: Option<String>,
    },

    /// Suggest payments that settle every balance
    Plan {
        /// Household name or ID (defaults to the first household)
        #[arg(long)]
        household: Option<String>,
    },

    /// List expenses and settlements, newest first
    Ledger(LedgerArgs),

    /// Show spending by category
    Spending {
        /// Household name or ID (defaults to the first household)
        #[arg(long)]
        household: Option<String>,
    },

    /// Write the balance report as JSON or YAML
    Report(ReportArgs),

    /// Record a shared expense
    Expense(ExpenseArgs),

    /// Record a payment between two members
    Settle(SettleArgs),

    /// Preview an equal split of an amount
    Split(SplitArgs),

    /// Write a demo household snapshot
    Demo(DemoArgs),

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings, verbose: u8) {
    let fallback = match verbose {
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = HouseholdPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings, cli.verbose);

    let snapshot_path = cli.file.clone().unwrap_or_else(|| paths.snapshot_file());
    let repo = SnapshotRepository::new(snapshot_path.clone());

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("housesplit - shared household expenses");
            println!();
            println!("Run 'housesplit --help' for usage information.");
            println!("Run 'housesplit demo Alice Bob' to try it with sample data.");
            return Ok(());
        }
    };

    // Everything except demo, split and config reads the snapshot first
    match &command {
        Commands::Demo(_) | Commands::Split(_) | Commands::Config => {}
        _ => repo
            .load()
            .with_context(|| format!("Could not load {}", snapshot_path.display()))?,
    }

    match command {
        Commands::Balances { household } => {
            handle_balances_command(&repo, &settings, household.as_deref())?;
        }
        Commands::Plan { household } => {
            handle_plan_command(&repo, &settings, household.as_deref())?;
        }
        Commands::Ledger(args) => handle_ledger_command(&repo, &settings, args)?,
        Commands::Spending { household } => {
            handle_spending_command(&repo, &settings, household.as_deref())?;
        }
        Commands::Report(args) => handle_report_command(&repo, args)?,
        Commands::Expense(args) => handle_expense_command(&repo, &settings, args)?,
        Commands::Settle(args) => handle_settle_command(&repo, &settings, args)?,
        Commands::Split(args) => handle_split_command(&settings, args)?,
        Commands::Demo(args) => handle_demo_command(&repo, &snapshot_path, &settings, args)?,
        Commands::Config => {
            println!("housesplit Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot file:    {}", snapshot_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Max amount:      {}", settings.format_money(settings.max_amount));
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
