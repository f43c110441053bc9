//! Wedding plan models
//!
//! The wedding plan aggregates a savings target: a target date, a manually
//! entered target amount and starting savings, dated one-time contributions,
//! and itemized budget lines (quoted vs paid).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{BudgetItemId, ContributionId};
use super::money::Money;

/// A one-time, dated addition to the wedding savings pot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingContribution {
    /// Unique identifier
    pub id: ContributionId,

    /// When the contribution was made
    pub date: NaiveDate,

    /// Amount contributed
    pub amount: Money,

    /// Free-text note ("Bonus", "Gift from parents", ...)
    #[serde(default)]
    pub note: String,
}

impl WeddingContribution {
    /// Create a new contribution with a fresh id
    pub fn new(date: NaiveDate, amount: Money, note: impl Into<String>) -> Self {
        Self {
            id: ContributionId::new(),
            date,
            amount,
            note: note.into(),
        }
    }
}

/// An itemized line of the wedding budget (venue, catering, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingBudgetItem {
    /// Unique identifier
    pub id: BudgetItemId,

    /// What the item covers
    pub description: String,

    /// Quoted cost
    pub quoted: Money,

    /// Amount paid so far
    #[serde(default)]
    pub paid: Money,
}

impl WeddingBudgetItem {
    /// Create a new budget item with a fresh id
    pub fn new(description: impl Into<String>, quoted: Money, paid: Money) -> Self {
        Self {
            id: BudgetItemId::new(),
            description: description.into(),
            quoted,
            paid,
        }
    }

    /// Quoted minus paid, clamped at zero
    ///
    /// Overpaying an item never turns into a credit against the rest of the
    /// budget.
    pub fn outstanding(&self) -> Money {
        (self.quoted - self.paid).clamp_non_negative()
    }
}

/// The wedding savings plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingPlan {
    /// The wedding date; `None` while unset or when the stored value does
    /// not parse as a date
    #[serde(default, deserialize_with = "lenient_date")]
    pub target_date: Option<NaiveDate>,

    /// Manually entered overall target, used only when no budget items exist
    #[serde(default)]
    pub target_amount: Money,

    /// Savings already set aside before contributions were tracked
    #[serde(default)]
    pub current_savings: Money,

    /// One-time contributions, in the order they were recorded
    #[serde(default)]
    pub contributions: Vec<WeddingContribution>,

    /// Itemized budget lines; older data files omit this field entirely
    #[serde(default)]
    pub budget_items: Vec<WeddingBudgetItem>,
}

impl Default for WeddingPlan {
    fn default() -> Self {
        Self {
            target_date: None,
            target_amount: Money::zero(),
            current_savings: Money::zero(),
            contributions: Vec::new(),
            budget_items: Vec::new(),
        }
    }
}

/// Deserialize a date, degrading an unparseable value to `None`
///
/// A corrupt target date means "no meaningful target", not a failed load of
/// the whole finance file.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

/// Everything the planner persists: the full household record set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceState {
    /// Income entries, in the order they were recorded
    #[serde(default)]
    pub incomes: Vec<super::income::IncomeEntry>,

    /// Expense entries, in the order they were recorded
    #[serde(default)]
    pub expenses: Vec<super::expense::ExpenseEntry>,

    /// The wedding savings plan
    #[serde(default)]
    pub wedding: WeddingPlan,
}
