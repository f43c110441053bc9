//! The projection engine
//!
//! A stateless set of pure functions that turn dated financial records into
//! month-indexed totals, recurring-item projections, and savings-target
//! arithmetic. Nothing in here performs I/O, mutates its inputs, or reads
//! the system clock; every time-sensitive function takes an explicit
//! reference date, so results are reproducible and safe to compute from any
//! thread.

pub mod aggregate;
pub mod recurring;
pub mod wedding;

use crate::models::{ExpenseEntry, IncomeEntry, Money, MonthKey};

/// A record that belongs to exactly one calendar month
///
/// Aggregation and projection functions work over any such record, so the
/// same code serves income and expense entries.
pub trait MonthlyRecord {
    /// The month this record belongs to
    fn month(&self) -> MonthKey;

    /// The record's amount
    fn amount(&self) -> Money;
}

impl MonthlyRecord for IncomeEntry {
    fn month(&self) -> MonthKey {
        self.month
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

impl MonthlyRecord for ExpenseEntry {
    fn month(&self) -> MonthKey {
        self.month
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

pub use aggregate::{
    average_monthly_amount, group_by_month, monthly_totals, net_by_month, tracked_months,
};
pub use recurring::project_monthly_totals;
pub use wedding::{
    monthly_savings_need, months_until_wedding, remaining_after_savings, total_budget, total_paid,
    total_outstanding, total_savings,
};
