//! Finance state repository
//!
//! Persists the whole household record set (incomes, expenses, wedding plan)
//! as a single JSON document, the same aggregate shape the data has always
//! been stored in. All mutation goes through this repository so that id
//! uniqueness and insertion order stay intact.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::PlannerError;
use crate::models::{
    BudgetItemId, ContributionId, ExpenseEntry, ExpenseId, FinanceState, IncomeEntry, IncomeId,
    Money, WeddingBudgetItem, WeddingContribution, WeddingPlan,
};

use super::file_io::{load_json, store_json_atomic};

/// Partial update for a wedding budget item
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BudgetItemUpdate {
    pub description: Option<String>,
    pub quoted: Option<Money>,
    pub paid: Option<Money>,
}

impl BudgetItemUpdate {
    /// Whether this update changes anything at all
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.quoted.is_none() && self.paid.is_none()
    }
}

/// Repository for the full finance state
pub struct FinanceRepository {
    path: PathBuf,
    state: RwLock<FinanceState>,
}

impl FinanceRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(FinanceState::default()),
        }
    }

    /// Load state from disk; a missing file loads as the empty state
    pub fn load(&self) -> Result<(), PlannerError> {
        let loaded: FinanceState = load_json(&self.path)?;

        let mut state = self.write_lock()?;
        debug!(
            incomes = loaded.incomes.len(),
            expenses = loaded.expenses.len(),
            contributions = loaded.wedding.contributions.len(),
            "loaded finance state"
        );
        *state = loaded;
        Ok(())
    }

    /// Save state to disk atomically
    pub fn save(&self) -> Result<(), PlannerError> {
        let state = self.read_lock()?;
        store_json_atomic(&self.path, &*state)?;
        debug!(path = %self.path.display(), "saved finance state");
        Ok(())
    }

    /// A snapshot of the full state, for reports
    pub fn snapshot(&self) -> Result<FinanceState, PlannerError> {
        Ok(self.read_lock()?.clone())
    }

    // --- income entries ---

    /// All income entries, in recorded order
    pub fn incomes(&self) -> Result<Vec<IncomeEntry>, PlannerError> {
        Ok(self.read_lock()?.incomes.clone())
    }

    /// Append an income entry
    pub fn add_income(&self, entry: IncomeEntry) -> Result<(), PlannerError> {
        self.write_lock()?.incomes.push(entry);
        Ok(())
    }

    /// Remove an income entry by id, returning it if present
    pub fn remove_income(&self, id: IncomeId) -> Result<Option<IncomeEntry>, PlannerError> {
        let mut state = self.write_lock()?;
        let position = state.incomes.iter().position(|entry| entry.id == id);
        Ok(position.map(|index| state.incomes.remove(index)))
    }

    // --- expense entries ---

    /// All expense entries, in recorded order
    pub fn expenses(&self) -> Result<Vec<ExpenseEntry>, PlannerError> {
        Ok(self.read_lock()?.expenses.clone())
    }

    /// Append an expense entry
    pub fn add_expense(&self, entry: ExpenseEntry) -> Result<(), PlannerError> {
        self.write_lock()?.expenses.push(entry);
        Ok(())
    }

    /// Remove an expense entry by id, returning it if present
    pub fn remove_expense(&self, id: ExpenseId) -> Result<Option<ExpenseEntry>, PlannerError> {
        let mut state = self.write_lock()?;
        let position = state.expenses.iter().position(|entry| entry.id == id);
        Ok(position.map(|index| state.expenses.remove(index)))
    }

    // --- wedding plan ---

    /// The current wedding plan
    pub fn wedding_plan(&self) -> Result<WeddingPlan, PlannerError> {
        Ok(self.read_lock()?.wedding.clone())
    }

    /// Set the wedding date
    pub fn set_target_date(&self, date: Option<NaiveDate>) -> Result<(), PlannerError> {
        self.write_lock()?.wedding.target_date = date;
        Ok(())
    }

    /// Set the manually entered overall target amount
    pub fn set_target_amount(&self, amount: Money) -> Result<(), PlannerError> {
        self.write_lock()?.wedding.target_amount = amount;
        Ok(())
    }

    /// Set the starting savings figure
    pub fn set_current_savings(&self, amount: Money) -> Result<(), PlannerError> {
        self.write_lock()?.wedding.current_savings = amount;
        Ok(())
    }

    /// Append a contribution
    pub fn add_contribution(&self, contribution: WeddingContribution) -> Result<(), PlannerError> {
        self.write_lock()?.wedding.contributions.push(contribution);
        Ok(())
    }

    /// Remove a contribution by id, returning it if present
    pub fn remove_contribution(
        &self,
        id: ContributionId,
    ) -> Result<Option<WeddingContribution>, PlannerError> {
        let mut state = self.write_lock()?;
        let contributions = &mut state.wedding.contributions;
        let position = contributions.iter().position(|c| c.id == id);
        Ok(position.map(|index| contributions.remove(index)))
    }

    /// Append a budget item
    pub fn add_budget_item(&self, item: WeddingBudgetItem) -> Result<(), PlannerError> {
        self.write_lock()?.wedding.budget_items.push(item);
        Ok(())
    }

    /// Apply a partial update to a budget item in place
    ///
    /// Returns the updated item, or `None` when no item has that id.
    pub fn update_budget_item(
        &self,
        id: BudgetItemId,
        update: BudgetItemUpdate,
    ) -> Result<Option<WeddingBudgetItem>, PlannerError> {
        let mut state = self.write_lock()?;
        let Some(item) = state
            .wedding
            .budget_items
            .iter_mut()
            .find(|item| item.id == id)
        else {
            return Ok(None);
        };

        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(quoted) = update.quoted {
            item.quoted = quoted;
        }
        if let Some(paid) = update.paid {
            item.paid = paid;
        }

        Ok(Some(item.clone()))
    }

    /// Remove a budget item by id, returning it if present
    pub fn remove_budget_item(
        &self,
        id: BudgetItemId,
    ) -> Result<Option<WeddingBudgetItem>, PlannerError> {
        let mut state = self.write_lock()?;
        let items = &mut state.wedding.budget_items;
        let position = items.iter().position(|item| item.id == id);
        Ok(position.map(|index| items.remove(index)))
    }

    // --- lock plumbing ---

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, FinanceState>, PlannerError> {
        self.state
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, FinanceState>, PlannerError> {
        self.state
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
