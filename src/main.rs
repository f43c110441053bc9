use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nestegg::cli::{
    handle_expense_command, handle_income_command, handle_outlook_command, handle_wedding_command,
    ExpenseCommands, IncomeCommands, OutlookArgs, WeddingCommands,
};
use nestegg::config::{paths::PlannerPaths, settings::Settings};
use nestegg::storage::Storage;

#[derive(Parser)]
#[command(
    name = "nestegg",
    version,
    about = "Terminal-based wedding and household finance planner",
    long_about = "Nestegg keeps a household's income, spending, and \
                  wedding-savings plan in one place, and projects them \
                  forward so you can see whether the savings target is \
                  on track."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Income entries
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense entries
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Wedding savings plan
    #[command(subcommand)]
    Wedding(WeddingCommands),

    /// Forward monthly projection
    Outlook(OutlookArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    // The single place the clock is read; everything below takes the date
    // as a parameter.
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Income(cmd) => handle_income_command(&storage, &settings, today, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, today, cmd)?,
        Commands::Wedding(cmd) => handle_wedding_command(&storage, &settings, today, cmd)?,
        Commands::Outlook(args) => handle_outlook_command(&storage, &settings, today, args)?,
    }

    Ok(())
}
