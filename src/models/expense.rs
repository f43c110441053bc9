//! Expense entry model
//!
//! An expense entry records money leaving the household in a given calendar
//! month. Marking an entry as recurring makes forward projections repeat it
//! in every later month without storing duplicate records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;

/// Spending category for an expense entry
///
/// Serde names match the labels the data files have always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    Essentials,
    Discretionary,
    #[serde(rename = "House (one-off)")]
    HouseOneOff,
    #[serde(rename = "House (recurring)")]
    HouseRecurring,
    Wedding,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub fn all() -> [ExpenseCategory; 6] {
        [
            Self::Essentials,
            Self::Discretionary,
            Self::HouseRecurring,
            Self::HouseOneOff,
            Self::Wedding,
            Self::Other,
        ]
    }

    /// Parse a category from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "essentials" => Some(Self::Essentials),
            "discretionary" => Some(Self::Discretionary),
            "house-one-off" | "house (one-off)" | "house-oneoff" => Some(Self::HouseOneOff),
            "house-recurring" | "house (recurring)" => Some(Self::HouseRecurring),
            "wedding" => Some(Self::Wedding),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essentials => write!(f, "Essentials"),
            Self::Discretionary => write!(f, "Discretionary"),
            Self::HouseOneOff => write!(f, "House (one-off)"),
            Self::HouseRecurring => write!(f, "House (recurring)"),
            Self::Wedding => write!(f, "Wedding"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// An expense entry for a single calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: ExpenseId,

    /// The month this expense belongs to
    pub month: MonthKey,

    /// Free-text description ("Mortgage", "Groceries", ...)
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Spending category
    #[serde(default)]
    pub category: ExpenseCategory,

    /// Whether this expense repeats every month from its start month onward
    #[serde(default)]
    pub recurs_monthly: bool,
}

impl ExpenseEntry {
    /// Create a new expense entry with a fresh id
    pub fn new(
        month: MonthKey,
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            month,
            description: description.into(),
            amount,
            category,
            recurs_monthly: false,
        }
    }

    /// Mark this expense as recurring monthly
    pub fn recurring(mut self) -> Self {
        self.recurs_monthly = true;
        self
    }
}
