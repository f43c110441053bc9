//! Income entry model
//!
//! An income entry records money coming into the household in a given
//! calendar month: either the regular monthly salary or a one-off bonus.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;
use super::month::MonthKey;

/// Kind of income entry
///
/// Serde names match the labels the data files have always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IncomeKind {
    /// Regular salary, projected into every month from its start month onward
    #[default]
    #[serde(rename = "Monthly Income")]
    Salary,
    /// A one-off bonus, counted only in its own month
    #[serde(rename = "Bonus")]
    Bonus,
}

impl IncomeKind {
    /// Whether this kind recurs monthly in forward projections
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Salary)
    }

    /// Parse a kind from user input ("salary" or "bonus")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "monthly" | "monthly income" => Some(Self::Salary),
            "bonus" | "one-off" | "oneoff" => Some(Self::Bonus),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salary => write!(f, "Monthly Income"),
            Self::Bonus => write!(f, "One-off Bonus"),
        }
    }
}

/// An income entry for a single calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Unique identifier
    pub id: IncomeId,

    /// The month this income belongs to
    pub month: MonthKey,

    /// Free-text description ("Salary", "Tax refund", ...)
    pub description: String,

    /// Amount received
    pub amount: Money,

    /// Salary or one-off bonus
    #[serde(rename = "type", default)]
    pub kind: IncomeKind,
}

impl IncomeEntry {
    /// Create a new income entry with a fresh id
    pub fn new(month: MonthKey, description: impl Into<String>, amount: Money, kind: IncomeKind) -> Self {
        Self {
            id: IncomeId::new(),
            month,
            description: description.into(),
            amount,
            kind,
        }
    }

    /// Whether this entry recurs monthly in forward projections
    pub fn is_recurring(&self) -> bool {
        self.kind.is_recurring()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_recurrence() {
        assert!(IncomeKind::Salary.is_recurring());
        assert!(!IncomeKind::Bonus.is_recurring());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(IncomeKind::parse("salary"), Some(IncomeKind::Salary));
        assert_eq!(IncomeKind::parse("Bonus"), Some(IncomeKind::Bonus));
        assert_eq!(IncomeKind::parse("dividends"), None);
    }

    #[test]
    fn test_serde_uses_data_file_labels() {
        let entry = IncomeEntry::new(
            MonthKey::parse("2024-01").unwrap(),
            "Salary",
            Money::from_pence(200000),
            IncomeKind::Salary,
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"Monthly Income\""));

        let back: IncomeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, IncomeKind::Salary);
        assert_eq!(back.month, entry.month);
    }
}
