use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_budget_command, handle_categories, handle_dashboard, handle_export,
    handle_investment_command, handle_report, handle_reset, handle_theme,
    handle_transaction_command, BudgetCommands, InvestmentCommands, ReportArgs,
    TransactionCommands,
};
use fintrack::config::{FinancePaths, DATA_DIR_ENV};
use fintrack::models::{format_inr, ThemeMode};
use fintrack::services::FinanceContext;
use fintrack::storage::{keys, FileStore};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income, expense and investment tracker",
    long_about = "fintrack records income, expenses and investments in a local \
                  key-value store and summarizes them against a monthly budget."
)]
struct Cli {
    /// Directory holding fintrack data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Investment management commands
    #[command(subcommand, alias = "investment")]
    Invest(InvestmentCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show or switch the theme
    Theme {
        /// light or dark
        theme: Option<ThemeMode>,
    },

    /// Monthly overview
    Dashboard {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Filtered transaction report
    Report(ReportArgs),

    /// Export transactions as CSV
    Export {
        #[command(flatten)]
        filter: ReportArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List suggested categories and payment methods
    Categories,

    /// Delete all data and restore the sample transactions
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    paths.ensure_directories()?;

    let store = FileStore::open(paths.store_dir())?;
    let mut ctx = FinanceContext::init(store);

    match cli.command {
        Some(Commands::Txn(cmd)) => handle_transaction_command(&mut ctx, cmd)?,
        Some(Commands::Invest(cmd)) => handle_investment_command(&mut ctx, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ctx, cmd)?,
        Some(Commands::Theme { theme }) => handle_theme(&mut ctx, theme)?,
        Some(Commands::Dashboard { month }) => handle_dashboard(&ctx, month)?,
        Some(Commands::Report(args)) => handle_report(&ctx, &args)?,
        Some(Commands::Export { filter, output }) => handle_export(&ctx, &filter, output)?,
        Some(Commands::Categories) => handle_categories(&ctx)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes)?,
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Store directory: {}", ctx.store().dir().display());
            println!();
            println!("Store keys:");
            for key in keys::ALL {
                println!("  {:<16} {}", key, ctx.store().path_for(key).display());
            }
            println!();
            println!("Settings:");
            println!("  Theme:  {}", ctx.settings().theme);
            println!("  Budget: {}", format_inr(ctx.budget()));
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for this month's overview.");
        }
    }

    Ok(())
}
