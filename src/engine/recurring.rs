//! Recurring-item projection
//!
//! Projects records across a caller-supplied horizon of target months. A
//! record classified as recurring stands for "a standing monthly amount from
//! its start month forward", so it contributes to its own month and every
//! later horizon month; a one-off contributes only to its exact month.

use std::collections::BTreeMap;

use crate::models::{Money, MonthKey};

use super::MonthlyRecord;

/// Project monthly totals across a horizon, expanding recurring records
///
/// Every month in `horizon` appears in the result, initialized to zero.
/// For each record, the caller-supplied `is_recurring` predicate decides
/// the contribution rule:
///
/// - recurring: added to every horizon month on or after the record's own
///   month — horizon months before the start month are unaffected;
/// - one-off: added only to the horizon month exactly matching the record's
///   month; a one-off outside the horizon contributes nothing.
pub fn project_monthly_totals<T, F>(
    records: &[T],
    horizon: &[MonthKey],
    is_recurring: F,
) -> BTreeMap<MonthKey, Money>
where
    T: MonthlyRecord,
    F: Fn(&T) -> bool,
{
    let mut totals: BTreeMap<MonthKey, Money> = horizon
        .iter()
        .map(|month| (*month, Money::zero()))
        .collect();

    for record in records {
        if is_recurring(record) {
            for (month, total) in totals.iter_mut() {
                if *month >= record.month() {
                    *total += record.amount();
                }
            }
        } else if let Some(total) = totals.get_mut(&record.month()) {
            *total += record.amount();
        }
    }

    totals
}
