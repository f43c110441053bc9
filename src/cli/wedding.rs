//! Wedding plan CLI commands
//!
//! Implements CLI commands for the wedding savings plan: target fields,
//! contributions, and the itemized budget.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::reports::WeddingReport;
use crate::services::WeddingService;
use crate::storage::{BudgetItemUpdate, Storage};

use super::{parse_amount, parse_date};

/// Wedding subcommands
#[derive(Subcommand)]
pub enum WeddingCommands {
    /// Show the wedding savings roadmap
    Show,

    /// Update the wedding date, target amount, or current savings
    Set {
        /// Wedding date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Overall target amount, used until budget items are entered
        #[arg(long)]
        target: Option<String>,

        /// Savings already set aside
        #[arg(long)]
        savings: Option<String>,
    },

    /// Record a one-time savings contribution
    Contribute {
        /// Amount contributed
        amount: String,

        /// Date of the contribution (YYYY-MM-DD; defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Note ("Pay rise, bonus, etc.")
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recorded contributions
    Contributions,

    /// Remove a contribution by id
    RemoveContribution {
        /// Contribution id (e.g., "ctb-1a2b3c4d")
        id: String,
    },

    /// Manage itemized budget lines
    #[command(subcommand)]
    Item(ItemCommands),
}

/// Budget item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a budget item
    Add {
        /// What the item covers ("Venue", "Catering", ...)
        description: String,

        /// Quoted cost
        #[arg(short, long)]
        quoted: String,

        /// Amount already paid
        #[arg(short, long, default_value = "0")]
        paid: String,
    },

    /// Update fields of a budget item
    Update {
        /// Item id (e.g., "itm-1a2b3c4d")
        id: String,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New quoted cost
        #[arg(short, long)]
        quoted: Option<String>,

        /// New paid amount
        #[arg(short, long)]
        paid: Option<String>,
    },

    /// Remove a budget item by id
    Remove {
        /// Item id
        id: String,
    },
}

/// Handle a wedding command
pub fn handle_wedding_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: WeddingCommands,
) -> PlannerResult<()> {
    let service = WeddingService::new(storage);

    match cmd {
        WeddingCommands::Show => {
            let plan = service.plan()?;
            let report = WeddingReport::generate(&plan, today);
            print!("{}", report.format_terminal());
        }

        WeddingCommands::Set {
            date,
            target,
            savings,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let target = target.as_deref().map(parse_amount).transpose()?;
            let savings = savings.as_deref().map(parse_amount).transpose()?;

            let plan = service.update_plan(date, target, savings)?;
            match plan.target_date {
                Some(date) => println!("Wedding date: {}", date),
                None => println!("Wedding date: not set"),
            }
            println!(
                "Target: {}  Current savings: {}",
                plan.target_amount.format_with_symbol(&settings.currency_symbol),
                plan.current_savings.format_with_symbol(&settings.currency_symbol)
            );
        }

        WeddingCommands::Contribute { amount, date, note } => {
            let amount = parse_amount(&amount)?;
            let date = match date.as_deref() {
                Some(raw) => parse_date(raw)?,
                None => today,
            };

            let contribution = service.add_contribution(date, amount, note.as_deref().unwrap_or(""))?;
            println!(
                "Recorded contribution of {} on {} ({})",
                contribution.amount.format_with_symbol(&settings.currency_symbol),
                contribution.date,
                contribution.note
            );
        }

        WeddingCommands::Contributions => {
            let plan = service.plan()?;
            if plan.contributions.is_empty() {
                println!("No extra savings recorded yet.");
                return Ok(());
            }

            println!("{:<14} {:<12} {:>12}  Note", "Id", "Date", "Amount");
            println!("{}", "-".repeat(60));
            for contribution in &plan.contributions {
                println!(
                    "{:<14} {:<12} {:>12}  {}",
                    contribution.id.to_string(),
                    contribution.date.to_string(),
                    contribution
                        .amount
                        .format_with_symbol(&settings.currency_symbol),
                    contribution.note
                );
            }
        }

        WeddingCommands::RemoveContribution { id } => {
            let removed = service.remove_contribution(&id)?;
            println!(
                "Removed contribution of {} from {}",
                removed.amount.format_with_symbol(&settings.currency_symbol),
                removed.date
            );
        }

        WeddingCommands::Item(item_cmd) => handle_item_command(&service, settings, item_cmd)?,
    }

    Ok(())
}

fn handle_item_command(
    service: &WeddingService<'_>,
    settings: &Settings,
    cmd: ItemCommands,
) -> PlannerResult<()> {
    match cmd {
        ItemCommands::Add {
            description,
            quoted,
            paid,
        } => {
            let quoted = parse_amount(&quoted)?;
            let paid = parse_amount(&paid)?;

            let item = service.add_budget_item(&description, quoted, paid)?;
            println!(
                "Added budget item {} ({}): quoted {}, paid {}",
                item.description,
                item.id,
                item.quoted.format_with_symbol(&settings.currency_symbol),
                item.paid.format_with_symbol(&settings.currency_symbol)
            );
        }

        ItemCommands::Update {
            id,
            description,
            quoted,
            paid,
        } => {
            let update = BudgetItemUpdate {
                description,
                quoted: quoted.as_deref().map(parse_amount).transpose()?,
                paid: paid.as_deref().map(parse_amount).transpose()?,
            };

            let item = service.update_budget_item(&id, update)?;
            println!(
                "Updated {}: quoted {}, paid {}, outstanding {}",
                item.description,
                item.quoted.format_with_symbol(&settings.currency_symbol),
                item.paid.format_with_symbol(&settings.currency_symbol),
                item.outstanding()
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        ItemCommands::Remove { id } => {
            let removed = service.remove_budget_item(&id)?;
            println!("Removed budget item {}", removed.description);
        }
    }

    Ok(())
}
