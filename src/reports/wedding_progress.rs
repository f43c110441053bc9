//! Wedding Progress Report
//!
//! Summarizes the wedding budget: quoted vs paid per item, outstanding
//! balance, savings available, and the monthly amount still needed before
//! the target date.

use chrono::NaiveDate;

use crate::engine::{
    monthly_savings_need, months_until_wedding, remaining_after_savings, total_budget, total_paid,
    total_outstanding, total_savings,
};
use crate::models::{Money, WeddingBudgetItem, WeddingPlan};

/// Wedding Progress Report
#[derive(Debug, Clone)]
pub struct WeddingReport {
    /// The wedding date, if one has been set
    pub target_date: Option<NaiveDate>,
    /// Total quoted across all budget items
    pub budget_total: Money,
    /// Total paid across all budget items
    pub paid_total: Money,
    /// Quoted minus paid, clamped at zero
    pub outstanding: Money,
    /// Starting savings plus all contributions
    pub savings_available: Money,
    /// What is still unfunded after counting savings
    pub remaining_after_savings: Money,
    /// Whole months until the wedding, counting the current month
    pub months_remaining: u32,
    /// Even monthly amount needed to close the gap in time
    pub monthly_savings_needed: Money,
    /// The budget items, in recorded order
    pub items: Vec<WeddingBudgetItem>,
    /// Number of contributions recorded so far
    pub contribution_count: usize,
}

impl WeddingReport {
    /// Generate the report for a plan as of `reference`
    pub fn generate(plan: &WeddingPlan, reference: NaiveDate) -> Self {
        Self {
            target_date: plan.target_date,
            budget_total: total_budget(plan),
            paid_total: total_paid(plan),
            outstanding: total_outstanding(plan),
            savings_available: total_savings(plan),
            remaining_after_savings: remaining_after_savings(plan),
            months_remaining: months_until_wedding(plan, reference),
            monthly_savings_needed: monthly_savings_need(plan, reference),
            items: plan.budget_items.clone(),
            contribution_count: plan.contributions.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Wedding savings roadmap\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        match self.target_date {
            Some(date) => output.push_str(&format!("Wedding date:        {}\n", date)),
            None => output.push_str("Wedding date:        not set\n"),
        }
        output.push_str(&format!("Months remaining:    {}\n", self.months_remaining));
        output.push_str(&format!(
            "Savings available:   {} ({} contributions)\n",
            self.savings_available, self.contribution_count
        ));
        output.push('\n');

        if self.items.is_empty() {
            output.push_str("No budget items recorded yet.\n");
        } else {
            output.push_str(&format!(
                "{:<14} {:<24} {:>10} {:>10} {:>12}\n",
                "Id", "Item", "Quoted", "Paid", "Outstanding"
            ));
            output.push_str(&"-".repeat(76));
            output.push('\n');

            for item in &self.items {
                output.push_str(&format!(
                    "{:<14} {:<24} {:>10} {:>10} {:>12}\n",
                    item.id.to_string(),
                    truncate(&item.description, 24),
                    item.quoted.to_string(),
                    item.paid.to_string(),
                    item.outstanding().to_string()
                ));
            }

            output.push_str(&"-".repeat(76));
            output.push('\n');
            output.push_str(&format!(
                "{:<39} {:>10} {:>10} {:>12}\n",
                "Total",
                self.budget_total.to_string(),
                self.paid_total.to_string(),
                self.outstanding.to_string()
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "Still to save:       {}\n",
            self.remaining_after_savings
        ));
        output.push_str(&format!(
            "Monthly need:        {}\n",
            self.monthly_savings_needed
        ));

        output
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
