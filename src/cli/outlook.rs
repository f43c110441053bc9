//! Outlook CLI command
//!
//! Renders the forward-looking monthly projection table, optionally as CSV.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::reports::OutlookReport;
use crate::storage::Storage;

/// Arguments for the outlook command
#[derive(Args)]
pub struct OutlookArgs {
    /// How many months ahead to project (defaults to the configured horizon)
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Emit CSV instead of the table
    #[arg(long)]
    pub csv: bool,
}

/// Handle the outlook command
pub fn handle_outlook_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: OutlookArgs,
) -> PlannerResult<()> {
    let horizon = args.months.unwrap_or(settings.outlook_months).max(1);
    let state = storage.finance.snapshot()?;
    let report = OutlookReport::generate(&state, today, horizon);

    if args.csv {
        let mut stdout = std::io::stdout();
        report.export_csv(&mut stdout)?;
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}
