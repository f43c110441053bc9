//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Handlers receive the
//! current date from the caller; nothing below this layer reads the clock.

pub mod expense;
pub mod income;
pub mod outlook;
pub mod wedding;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use outlook::{handle_outlook_command, OutlookArgs};
pub use wedding::{handle_wedding_command, WeddingCommands};

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, MonthKey};

/// Parse a `--month` argument, defaulting to the month containing `today`
pub(crate) fn parse_month_or_current(
    month: Option<&str>,
    today: NaiveDate,
) -> PlannerResult<MonthKey> {
    match month {
        Some(raw) => MonthKey::parse(raw),
        None => Ok(MonthKey::from_date(today)),
    }
}

/// Parse an amount argument
pub(crate) fn parse_amount(raw: &str) -> PlannerResult<Money> {
    Money::parse(raw).map_err(|e| PlannerError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(raw: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_or_current() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();

        let explicit = parse_month_or_current(Some("2024-01"), today).unwrap();
        assert_eq!(explicit.to_string(), "2024-01");

        let default = parse_month_or_current(None, today).unwrap();
        assert_eq!(default.to_string(), "2024-07");

        assert!(parse_month_or_current(Some("July"), today).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-05-01").is_ok());
        assert!(matches!(
            parse_date("01/05/2026"),
            Err(PlannerError::InvalidDate(_))
        ));
    }
}
