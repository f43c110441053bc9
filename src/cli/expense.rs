//! Expense CLI commands
//!
//! Implements CLI commands for recording and listing expense entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::ExpenseCategory;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_amount, parse_month_or_current};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense entry
    Add {
        /// Amount spent (e.g., "1200" or "39.99")
        amount: String,

        /// Month the expense belongs to (e.g., "2024-01"; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Description ("Mortgage", "Groceries", ...)
        #[arg(short, long)]
        description: Option<String>,

        /// Category: essentials, discretionary, house-recurring, house-one-off, wedding, other
        #[arg(short, long, default_value = "essentials")]
        category: String,

        /// Repeat this expense every month from its start month onward
        #[arg(short, long)]
        recurring: bool,
    },

    /// List expense entries
    List {
        /// Month to list (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// List every recorded month
        #[arg(long)]
        all: bool,
    },

    /// Remove an expense entry by id
    Remove {
        /// Entry id (e.g., "exp-1a2b3c4d")
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> PlannerResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            month,
            description,
            category,
            recurring,
        } => {
            let month = parse_month_or_current(month.as_deref(), today)?;
            let amount = parse_amount(&amount)?;
            let category = ExpenseCategory::parse(&category).ok_or_else(|| {
                let known: Vec<String> = ExpenseCategory::all()
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                PlannerError::Validation(format!(
                    "Unknown expense category '{}': expected one of {}",
                    category,
                    known.join(", ")
                ))
            })?;

            let entry = service.add(
                month,
                description.as_deref().unwrap_or(""),
                amount,
                category,
                recurring,
            )?;

            let suffix = if entry.recurs_monthly {
                " (recurs monthly)"
            } else {
                ""
            };
            println!(
                "Recorded {} [{}] for {}: {}{}",
                entry.description,
                entry.category,
                entry.month.friendly(),
                entry.amount.format_with_symbol(&settings.currency_symbol),
                suffix
            );
        }

        ExpenseCommands::List { month, all } => {
            let entries = if all {
                service.list()?
            } else {
                let month = parse_month_or_current(month.as_deref(), today)?;
                service.list_for_month(month)?
            };

            if entries.is_empty() {
                println!("No expenses recorded yet.");
                return Ok(());
            }

            println!(
                "{:<14} {:<10} {:<24} {:<20} {:>12}",
                "Id", "Month", "Description", "Category", "Amount"
            );
            println!("{}", "-".repeat(84));
            for entry in &entries {
                let category = if entry.recurs_monthly {
                    format!("{} · Monthly", entry.category)
                } else {
                    entry.category.to_string()
                };
                println!(
                    "{:<14} {:<10} {:<24} {:<20} {:>12}",
                    entry.id.to_string(),
                    entry.month.to_string(),
                    entry.description,
                    category,
                    entry.amount.format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        ExpenseCommands::Remove { id } => {
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
