//! Calendar month keys
//!
//! Every income and expense entry belongs to exactly one calendar month,
//! identified by a key in `YYYY-MM` form. Ordering always goes through the
//! numeric (year, month) comparator, never through string comparison, so
//! calendar order holds regardless of how a key was formatted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PlannerError> {
        if !(1..=12).contains(&month) {
            return Err(PlannerError::InvalidMonthKey(format!(
                "{:04}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a `YYYY-MM` key
    ///
    /// Fails with [`PlannerError::InvalidMonthKey`] for anything else;
    /// arithmetic on a silently mis-parsed month would corrupt every total
    /// derived from it.
    pub fn parse(s: &str) -> Result<Self, PlannerError> {
        let invalid = || PlannerError::InvalidMonthKey(s.to_string());

        let (year_str, month_str) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }

    /// Offset this month by a signed number of months, rolling over years
    pub fn plus_months(&self, offset: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + offset;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// The month immediately after this one
    pub fn next(&self) -> Self {
        self.plus_months(1)
    }

    /// The month immediately before this one
    pub fn prev(&self) -> Self {
        self.plus_months(-1)
    }

    /// `count` consecutive months starting at this one
    pub fn sequence(&self, count: usize) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(count);
        let mut current = *self;
        for _ in 0..count {
            months.push(current);
            current = current.next();
        }
        months
    }

    /// Format in a human-friendly way, e.g. "March 2024"
    pub fn friendly(&self) -> String {
        let month_names = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let month_name = month_names[(self.month - 1) as usize];
        format!("{} {}", month_name, self.year)
    }
}

/// Friendly label for a raw month string, falling back to the input
///
/// Display-only: an unparseable key comes back unchanged rather than
/// erroring, so one bad record cannot take a whole table down.
pub fn friendly_month_label(raw: &str) -> String {
    match MonthKey::parse(raw) {
        Ok(key) => key.friendly(),
        Err(_) => raw.to_string(),
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = PlannerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
