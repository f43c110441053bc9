//! Aggregation over dated records
//!
//! Month-indexed groupings, totals, and averages. All maps are keyed by
//! [`MonthKey`], so iteration order is calendar order via the month-key
//! comparator.

use std::collections::BTreeMap;

use crate::models::{Money, MonthKey};

use super::MonthlyRecord;

/// Group records by their exact month key
///
/// Input order is preserved within each group. Months with no records are
/// simply absent.
pub fn group_by_month<T: MonthlyRecord>(records: &[T]) -> BTreeMap<MonthKey, Vec<&T>> {
    let mut groups: BTreeMap<MonthKey, Vec<&T>> = BTreeMap::new();
    for record in records {
        groups.entry(record.month()).or_default().push(record);
    }
    groups
}

/// Sum record amounts per month
///
/// One entry per distinct month present in the input; absent months are
/// absent from the result, not zero.
pub fn monthly_totals<T: MonthlyRecord>(records: &[T]) -> BTreeMap<MonthKey, Money> {
    let mut totals: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for record in records {
        *totals.entry(record.month()).or_insert_with(Money::zero) += record.amount();
    }
    totals
}

/// Average amount per month actually represented in the records
///
/// The denominator is the count of distinct months, not the record count and
/// not the calendar span: two records in the same month average differently
/// than two records in different months. Empty input averages to zero.
pub fn average_monthly_amount<T: MonthlyRecord>(records: &[T]) -> Money {
    let totals = monthly_totals(records);
    if totals.is_empty() {
        return Money::zero();
    }

    let sum: Money = totals.values().copied().sum();
    sum.divided_by(totals.len() as i64)
}

/// Net position (income minus expenses) per month
///
/// The result covers the union of months present on either side; a month
/// with income but no expenses still appears, with the missing side counted
/// as zero.
pub fn net_by_month(
    incomes: &[impl MonthlyRecord],
    expenses: &[impl MonthlyRecord],
) -> BTreeMap<MonthKey, Money> {
    let income_totals = monthly_totals(incomes);
    let expense_totals = monthly_totals(expenses);

    let mut net: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for (month, total) in &income_totals {
        *net.entry(*month).or_insert_with(Money::zero) += *total;
    }
    for (month, total) in &expense_totals {
        *net.entry(*month).or_insert_with(Money::zero) -= *total;
    }
    net
}

/// All distinct months tracked across both collections, in calendar order
///
/// `extra` months (e.g. the currently selected month) are included even when
/// no record mentions them yet.
pub fn tracked_months(
    incomes: &[impl MonthlyRecord],
    expenses: &[impl MonthlyRecord],
    extra: &[MonthKey],
) -> Vec<MonthKey> {
    let mut months: std::collections::BTreeSet<MonthKey> = std::collections::BTreeSet::new();
    months.extend(incomes.iter().map(|r| r.month()));
    months.extend(expenses.iter().map(|r| r.month()));
    months.extend(extra.iter().copied());
    months.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseEntry, IncomeEntry, IncomeKind};

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn income(m: &str, pence: i64, kind: IncomeKind) -> IncomeEntry {
        IncomeEntry::new(month(m), "test income", Money::from_pence(pence), kind)
    }

    fn expense(m: &str, pence: i64) -> ExpenseEntry {
        ExpenseEntry::new(
            month(m),
            "test expense",
            Money::from_pence(pence),
            ExpenseCategory::Essentials,
        )
    }

    #[test]
    fn test_group_by_month_preserves_input_order() {
        let entries = vec![
            income("2024-01", 100, IncomeKind::Salary),
            income("2024-02", 200, IncomeKind::Salary),
            income("2024-01", 300, IncomeKind::Bonus),
        ];

        let groups = group_by_month(&entries);
        assert_eq!(groups.len(), 2);

        let january = &groups[&month("2024-01")];
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].amount, Money::from_pence(100));
        assert_eq!(january[1].amount, Money::from_pence(300));
    }

    #[test]
    fn test_monthly_totals_conserve_grand_total() {
        let entries = vec![
            income("2024-01", 1250, IncomeKind::Salary),
            income("2024-01", 750, IncomeKind::Bonus),
            income("2024-03", 990, IncomeKind::Salary),
        ];

        let totals = monthly_totals(&entries);
        let summed: Money = totals.values().copied().sum();
        let direct: Money = entries.iter().map(|e| e.amount).sum();
        assert_eq!(summed, direct);

        // Absent months stay absent.
        assert!(!totals.contains_key(&month("2024-02")));
    }

    #[test]
    fn test_average_uses_distinct_month_denominator() {
        // Total 4500 across two distinct months: 2250, not 1500 (per record)
        // and not dependent on the gap between months.
        let entries = vec![
            income("2024-01", 200000, IncomeKind::Salary),
            income("2024-01", 50000, IncomeKind::Bonus),
            income("2024-02", 200000, IncomeKind::Salary),
        ];

        assert_eq!(average_monthly_amount(&entries), Money::from_pence(225000));
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        let entries: Vec<IncomeEntry> = Vec::new();
        assert_eq!(average_monthly_amount(&entries), Money::zero());
    }

    #[test]
    fn test_net_by_month() {
        let incomes = vec![income("2024-03", 300000, IncomeKind::Salary)];
        let expenses = vec![expense("2024-03", 120000), expense("2024-03", 40000)];

        let net = net_by_month(&incomes, &expenses);
        assert_eq!(net.len(), 1);
        assert_eq!(net[&month("2024-03")], Money::from_pence(140000));
    }

    #[test]
    fn test_net_by_month_covers_union_of_months() {
        let incomes = vec![income("2024-01", 100000, IncomeKind::Salary)];
        let expenses = vec![expense("2024-02", 30000)];

        let net = net_by_month(&incomes, &expenses);
        let months: Vec<MonthKey> = net.keys().copied().collect();
        assert_eq!(months, vec![month("2024-01"), month("2024-02")]);
        assert_eq!(net[&month("2024-01")], Money::from_pence(100000));
        assert_eq!(net[&month("2024-02")], Money::from_pence(-30000));
    }

    #[test]
    fn test_tracked_months_sorted_with_extra() {
        let incomes = vec![income("2024-03", 1, IncomeKind::Salary)];
        let expenses = vec![expense("2023-12", 1)];

        let months = tracked_months(&incomes, &expenses, &[month("2024-03"), month("2024-05")]);
        assert_eq!(
            months,
            vec![month("2023-12"), month("2024-03"), month("2024-05")]
        );
    }

    #[test]
    fn test_zero_amount_records_are_harmless() {
        // The service layer rejects zero amounts, but older files may still
        // contain them; aggregation treats them as no-ops.
        let entries = vec![income("2024-01", 0, IncomeKind::Salary)];
        let totals = monthly_totals(&entries);
        assert_eq!(totals[&month("2024-01")], Money::zero());
        assert_eq!(average_monthly_amount(&entries), Money::zero());
    }
}
