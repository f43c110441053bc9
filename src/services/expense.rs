//! Expense service
//!
//! Business logic for recording and removing expense entries, including the
//! recurring-monthly flag that drives forward projections.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseCategory, ExpenseEntry, Money, MonthKey};
use crate::storage::Storage;

use super::income::{normalize_description, validate_amount};

/// Service for expense entry management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense entry for a month
    pub fn add(
        &self,
        month: MonthKey,
        description: &str,
        amount: Money,
        category: ExpenseCategory,
        recurs_monthly: bool,
    ) -> PlannerResult<ExpenseEntry> {
        validate_amount(amount)?;

        let description = normalize_description(description, "Expense");
        let mut entry = ExpenseEntry::new(month, description, amount, category);
        entry.recurs_monthly = recurs_monthly;

        self.storage.finance.add_expense(entry.clone())?;
        self.storage.finance.save()?;

        info!(id = %entry.id, month = %entry.month, recurring = entry.recurs_monthly, "recorded expense entry");
        Ok(entry)
    }

    /// All expense entries
    pub fn list(&self) -> PlannerResult<Vec<ExpenseEntry>> {
        self.storage.finance.expenses()
    }

    /// Expense entries for one month, in recorded order
    pub fn list_for_month(&self, month: MonthKey) -> PlannerResult<Vec<ExpenseEntry>> {
        Ok(self
            .storage
            .finance
            .expenses()?
            .into_iter()
            .filter(|entry| entry.month == month)
            .collect())
    }

    /// Remove an expense entry by id (full UUID or short form)
    pub fn remove(&self, id: &str) -> PlannerResult<ExpenseEntry> {
        let entries = self.storage.finance.expenses()?;
        let matches: Vec<_> = entries
            .iter()
            .filter(|entry| entry.id.matches(id))
            .collect();

        let entry = match matches.as_slice() {
            [] => return Err(PlannerError::expense_not_found(id)),
            [single] => (*single).clone(),
            _ => {
                return Err(PlannerError::Validation(format!(
                    "Ambiguous expense id: {}",
                    id
                )))
            }
        };

        self.storage.finance.remove_expense(entry.id)?;
        self.storage.finance.save()?;

        info!(id = %entry.id, "removed expense entry");
        Ok(entry)
    }
}
