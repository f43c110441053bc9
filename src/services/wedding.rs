//! Wedding plan service
//!
//! Business logic for the wedding savings plan: target fields, one-time
//! contributions, and itemized budget lines with partial updates.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, WeddingBudgetItem, WeddingContribution, WeddingPlan};
use crate::storage::{BudgetItemUpdate, Storage};

use super::income::{normalize_description, validate_amount};

/// Service for wedding plan management
pub struct WeddingService<'a> {
    storage: &'a Storage,
}

impl<'a> WeddingService<'a> {
    /// Create a new wedding service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current plan
    pub fn plan(&self) -> PlannerResult<WeddingPlan> {
        self.storage.finance.wedding_plan()
    }

    /// Update the plan's target fields; `None` arguments are left untouched
    pub fn update_plan(
        &self,
        target_date: Option<NaiveDate>,
        target_amount: Option<Money>,
        current_savings: Option<Money>,
    ) -> PlannerResult<WeddingPlan> {
        if let Some(date) = target_date {
            self.storage.finance.set_target_date(Some(date))?;
        }
        if let Some(amount) = target_amount {
            if amount.is_negative() {
                return Err(PlannerError::Validation(format!(
                    "Target amount cannot be negative, got {}",
                    amount
                )));
            }
            self.storage.finance.set_target_amount(amount)?;
        }
        if let Some(savings) = current_savings {
            if savings.is_negative() {
                return Err(PlannerError::Validation(format!(
                    "Current savings cannot be negative, got {}",
                    savings
                )));
            }
            self.storage.finance.set_current_savings(savings)?;
        }

        self.storage.finance.save()?;
        self.plan()
    }

    /// Record a one-time contribution to the savings pot
    pub fn add_contribution(
        &self,
        date: NaiveDate,
        amount: Money,
        note: &str,
    ) -> PlannerResult<WeddingContribution> {
        validate_amount(amount)?;

        let note = normalize_description(note, "Wedding savings deposit");
        let contribution = WeddingContribution::new(date, amount, note);

        self.storage.finance.add_contribution(contribution.clone())?;
        self.storage.finance.save()?;

        info!(id = %contribution.id, "recorded wedding contribution");
        Ok(contribution)
    }

    /// Remove a contribution by id (full UUID or short form)
    pub fn remove_contribution(&self, id: &str) -> PlannerResult<WeddingContribution> {
        let plan = self.plan()?;
        let matches: Vec<_> = plan
            .contributions
            .iter()
            .filter(|c| c.id.matches(id))
            .collect();

        let contribution = match matches.as_slice() {
            [] => return Err(PlannerError::contribution_not_found(id)),
            [single] => (*single).clone(),
            _ => {
                return Err(PlannerError::Validation(format!(
                    "Ambiguous contribution id: {}",
                    id
                )))
            }
        };

        self.storage.finance.remove_contribution(contribution.id)?;
        self.storage.finance.save()?;
        Ok(contribution)
    }

    /// Add an itemized budget line
    pub fn add_budget_item(
        &self,
        description: &str,
        quoted: Money,
        paid: Money,
    ) -> PlannerResult<WeddingBudgetItem> {
        if quoted.is_negative() || paid.is_negative() {
            return Err(PlannerError::Validation(
                "Quoted and paid amounts cannot be negative".into(),
            ));
        }

        let description = normalize_description(description, "Budget item");
        let item = WeddingBudgetItem::new(description, quoted, paid);

        self.storage.finance.add_budget_item(item.clone())?;
        self.storage.finance.save()?;

        info!(id = %item.id, "added wedding budget item");
        Ok(item)
    }

    /// Apply a partial update to a budget item by id
    pub fn update_budget_item(
        &self,
        id: &str,
        update: BudgetItemUpdate,
    ) -> PlannerResult<WeddingBudgetItem> {
        if update.is_empty() {
            return Err(PlannerError::Validation(
                "Nothing to update: provide a description, quoted, or paid value".into(),
            ));
        }
        if update.quoted.is_some_and(|q| q.is_negative())
            || update.paid.is_some_and(|p| p.is_negative())
        {
            return Err(PlannerError::Validation(
                "Quoted and paid amounts cannot be negative".into(),
            ));
        }

        let item_id = self.resolve_budget_item(id)?;
        let updated = self
            .storage
            .finance
            .update_budget_item(item_id, update)?
            .ok_or_else(|| PlannerError::budget_item_not_found(id))?;

        self.storage.finance.save()?;
        Ok(updated)
    }

    /// Remove a budget item by id (full UUID or short form)
    pub fn remove_budget_item(&self, id: &str) -> PlannerResult<WeddingBudgetItem> {
        let item_id = self.resolve_budget_item(id)?;
        let removed = self
            .storage
            .finance
            .remove_budget_item(item_id)?
            .ok_or_else(|| PlannerError::budget_item_not_found(id))?;

        self.storage.finance.save()?;
        Ok(removed)
    }

    fn resolve_budget_item(&self, id: &str) -> PlannerResult<crate::models::BudgetItemId> {
        let plan = self.plan()?;
        let matches: Vec<_> = plan
            .budget_items
            .iter()
            .filter(|item| item.id.matches(id))
            .collect();

        match matches.as_slice() {
            [] => Err(PlannerError::budget_item_not_found(id)),
            [single] => Ok(single.id),
            _ => Err(PlannerError::Validation(format!(
                "Ambiguous budget item id: {}",
                id
            ))),
        }
    }
}
