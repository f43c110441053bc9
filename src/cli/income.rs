//! Income CLI commands
//!
//! Implements CLI commands for recording and listing income entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::IncomeKind;
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_amount, parse_month_or_current};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record an income entry
    Add {
        /// Amount received (e.g., "2000" or "2000.50")
        amount: String,

        /// Month the income belongs to (e.g., "2024-01"; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Description ("Salary", "Tax refund", ...)
        #[arg(short, long)]
        description: Option<String>,

        /// Income kind: "salary" (recurs monthly) or "bonus" (one-off)
        #[arg(short, long, default_value = "salary")]
        kind: String,
    },

    /// List income entries
    List {
        /// Month to list (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// List every recorded month
        #[arg(long)]
        all: bool,
    },

    /// Remove an income entry by id
    Remove {
        /// Entry id (e.g., "inc-1a2b3c4d")
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: IncomeCommands,
) -> PlannerResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            month,
            description,
            kind,
        } => {
            let month = parse_month_or_current(month.as_deref(), today)?;
            let amount = parse_amount(&amount)?;
            let kind = IncomeKind::parse(&kind).ok_or_else(|| {
                PlannerError::Validation(format!(
                    "Unknown income kind '{}': expected 'salary' or 'bonus'",
                    kind
                ))
            })?;

            let entry = service.add(month, description.as_deref().unwrap_or(""), amount, kind)?;

            println!(
                "Recorded {} ({}) for {}: {}",
                entry.description,
                entry.kind,
                entry.month.friendly(),
                entry.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        IncomeCommands::List { month, all } => {
            let entries = if all {
                service.list()?
            } else {
                let month = parse_month_or_current(month.as_deref(), today)?;
                service.list_for_month(month)?
            };

            if entries.is_empty() {
                println!("No income recorded yet.");
                return Ok(());
            }

            println!(
                "{:<14} {:<10} {:<24} {:<16} {:>12}",
                "Id", "Month", "Description", "Kind", "Amount"
            );
            println!("{}", "-".repeat(80));
            for entry in &entries {
                println!(
                    "{:<14} {:<10} {:<24} {:<16} {:>12}",
                    entry.id.to_string(),
                    entry.month.to_string(),
                    entry.description,
                    entry.kind.to_string(),
                    entry.amount.format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        IncomeCommands::Remove { id } => {
            let removed = service.remove(&id)?;
            println!(
                "Removed {} ({}) from {}",
                removed.description,
                removed.amount.format_with_symbol(&settings.currency_symbol),
                removed.month.friendly()
            );
        }
    }

    Ok(())
}
