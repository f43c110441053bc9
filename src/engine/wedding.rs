//! Wedding savings and budget arithmetic
//!
//! Totals over the wedding plan, target-date month counting, and the even
//! monthly savings amount needed to close the remaining gap. All functions
//! take the plan and, where time matters, an explicit reference date.

use chrono::NaiveDate;

use crate::models::{Money, MonthKey, WeddingPlan};

/// Savings available: starting savings plus every recorded contribution
pub fn total_savings(plan: &WeddingPlan) -> Money {
    let contributions: Money = plan.contributions.iter().map(|c| c.amount).sum();
    plan.current_savings + contributions
}

/// Total quoted cost across all budget items
pub fn total_budget(plan: &WeddingPlan) -> Money {
    plan.budget_items.iter().map(|item| item.quoted).sum()
}

/// Total paid so far across all budget items
pub fn total_paid(plan: &WeddingPlan) -> Money {
    plan.budget_items.iter().map(|item| item.paid).sum()
}

/// Quoted minus paid across the whole budget, clamped at zero
pub fn total_outstanding(plan: &WeddingPlan) -> Money {
    (total_budget(plan) - total_paid(plan)).clamp_non_negative()
}

/// What still has to be found after counting available savings
pub fn remaining_after_savings(plan: &WeddingPlan) -> Money {
    (total_outstanding(plan) - total_savings(plan)).clamp_non_negative()
}

/// Whole months from the reference date to the wedding, counting the
/// current month
///
/// Computed between the first-of-month of both dates, so a target in the
/// same calendar month as the reference counts as 1, not 0. A missing or
/// unparseable target date counts as 0, as does a target already in the
/// past; the result is never negative.
pub fn months_until_wedding(plan: &WeddingPlan, reference: NaiveDate) -> u32 {
    let Some(target) = plan.target_date else {
        return 0;
    };

    let ref_month = MonthKey::from_date(reference);
    let target_month = MonthKey::from_date(target);

    let difference = (target_month.year() - ref_month.year()) * 12
        + (target_month.month() as i32 - ref_month.month() as i32)
        + 1; // include the current month
    difference.max(0) as u32
}

/// The even monthly amount required to close the remaining savings gap
///
/// The gap is budget-item-aware: outstanding balance minus available
/// savings, clamped at zero. When no budget items have been entered yet the
/// manually set target amount stands in for the outstanding balance. With
/// zero months remaining the whole gap is due now and is returned as-is.
pub fn monthly_savings_need(plan: &WeddingPlan, reference: NaiveDate) -> Money {
    let goal = if plan.budget_items.is_empty() {
        plan.target_amount
    } else {
        total_outstanding(plan)
    };
    let gap = (goal - total_savings(plan)).clamp_non_negative();

    let months = months_until_wedding(plan, reference);
    if months == 0 {
        return gap;
    }

    gap.divided_by(months as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WeddingBudgetItem, WeddingContribution};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan_with_contributions() -> WeddingPlan {
        WeddingPlan {
            target_date: Some(date(2026, 5, 1)),
            target_amount: Money::from_pence(2000000),
            current_savings: Money::from_pence(500000),
            contributions: vec![
                WeddingContribution::new(date(2024, 2, 14), Money::from_pence(120000), "Bonus"),
                WeddingContribution::new(date(2024, 4, 10), Money::from_pence(80000), "Gift"),
            ],
            budget_items: Vec::new(),
        }
    }

    #[test]
    fn test_total_savings_includes_contributions() {
        // 5000 + 1200 + 800 = 7000
        assert_eq!(
            total_savings(&plan_with_contributions()),
            Money::from_pence(700000)
        );
    }

    #[test]
    fn test_budget_totals_with_no_items_are_zero() {
        let plan = plan_with_contributions();
        assert_eq!(total_budget(&plan), Money::zero());
        assert_eq!(total_paid(&plan), Money::zero());
        assert_eq!(total_outstanding(&plan), Money::zero());
    }

    #[test]
    fn test_outstanding_clamped_when_overpaid() {
        let mut plan = WeddingPlan::default();
        plan.budget_items = vec![
            WeddingBudgetItem::new("Venue", Money::from_pence(100000), Money::from_pence(150000)),
            WeddingBudgetItem::new("Band", Money::from_pence(50000), Money::zero()),
        ];

        // Budget 1500, paid 1500: the venue overpayment is not a credit
        // against the band at the aggregate level either.
        assert_eq!(total_budget(&plan), Money::from_pence(150000));
        assert_eq!(total_paid(&plan), Money::from_pence(150000));
        assert_eq!(total_outstanding(&plan), Money::zero());
    }

    #[test]
    fn test_months_until_wedding_counts_current_month() {
        let mut plan = WeddingPlan::default();
        plan.target_date = Some(date(2026, 5, 16));

        // Same calendar month: 1, not 0.
        assert_eq!(months_until_wedding(&plan, date(2026, 5, 1)), 1);
        // Eleven calendar months ahead plus the current one.
        assert_eq!(months_until_wedding(&plan, date(2025, 6, 30)), 12);
    }

    #[test]
    fn test_months_until_wedding_never_negative() {
        let mut plan = WeddingPlan::default();
        plan.target_date = Some(date(2024, 1, 1));
        assert_eq!(months_until_wedding(&plan, date(2025, 6, 1)), 0);

        plan.target_date = None;
        assert_eq!(months_until_wedding(&plan, date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_savings_need_from_budget_items() {
        // Quoted 20000, paid 8000, savings 5000: outstanding 12000, gap
        // 7000, spread over 10 months = 700/month.
        let mut plan = WeddingPlan::default();
        plan.target_date = Some(date(2025, 3, 1));
        plan.current_savings = Money::from_pence(500000);
        plan.budget_items = vec![
            WeddingBudgetItem::new("Venue", Money::from_pence(1200000), Money::from_pence(500000)),
            WeddingBudgetItem::new("Catering", Money::from_pence(800000), Money::from_pence(300000)),
        ];

        assert_eq!(total_outstanding(&plan), Money::from_pence(1200000));

        // Reference June 2024: Jun 2024 .. Mar 2025 inclusive = 10 months.
        let reference = date(2024, 6, 15);
        assert_eq!(months_until_wedding(&plan, reference), 10);
        assert_eq!(
            monthly_savings_need(&plan, reference),
            Money::from_pence(70000)
        );
    }

    #[test]
    fn test_savings_need_falls_back_to_flat_target() {
        // No budget items yet: the manually entered target drives the gap.
        // Target 20000, saved 7000, 13 months (May 2025 .. May 2026) left.
        let plan = plan_with_contributions();
        let reference = date(2025, 5, 1);

        assert_eq!(months_until_wedding(&plan, reference), 13);
        assert_eq!(
            monthly_savings_need(&plan, reference),
            Money::from_pence(1300000).divided_by(13)
        );
    }

    #[test]
    fn test_savings_need_due_now_when_no_months_left() {
        let mut plan = WeddingPlan::default();
        plan.target_date = Some(date(2024, 1, 1));
        plan.target_amount = Money::from_pence(300000);

        // Past target: the whole gap is due immediately, undivided.
        assert_eq!(
            monthly_savings_need(&plan, date(2024, 9, 1)),
            Money::from_pence(300000)
        );
    }

    #[test]
    fn test_savings_need_zero_when_fully_funded() {
        let mut plan = plan_with_contributions();
        plan.budget_items = vec![WeddingBudgetItem::new(
            "Everything",
            Money::from_pence(600000),
            Money::from_pence(100000),
        )];

        // Outstanding 5000, savings 7000: gap clamps to zero.
        assert_eq!(
            monthly_savings_need(&plan, date(2025, 5, 1)),
            Money::zero()
        );
        assert_eq!(remaining_after_savings(&plan), Money::zero());
    }
}
