//! Core data models for the planner
//!
//! This module contains all the data structures that represent the planning
//! domain: month keys, money, income and expense entries, and the wedding
//! savings plan.

pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;
pub mod wedding;

pub use expense::{ExpenseCategory, ExpenseEntry};
pub use ids::{BudgetItemId, ContributionId, ExpenseId, IncomeId};
pub use income::{IncomeEntry, IncomeKind};
pub use money::Money;
pub use month::{friendly_month_label, MonthKey};
pub use wedding::{FinanceState, WeddingBudgetItem, WeddingContribution, WeddingPlan};
