//! Monthly Outlook Report
//!
//! Projects income, spending, and net position across a forward horizon of
//! consecutive months, expanding recurring entries, and compares the typical
//! monthly surplus with the wedding savings target.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io::Write;

use crate::engine::{
    average_monthly_amount, monthly_savings_need, months_until_wedding, project_monthly_totals,
    remaining_after_savings,
};
use crate::error::PlannerResult;
use crate::models::{FinanceState, Money, MonthKey};

/// One row of the outlook table
#[derive(Debug, Clone)]
pub struct OutlookRow {
    /// The month this row covers
    pub month: MonthKey,
    /// Projected income for the month
    pub income: Money,
    /// Projected expenses for the month
    pub expenses: Money,
    /// Projected net position for the month
    pub net: Money,
}

/// Monthly Outlook Report
#[derive(Debug, Clone)]
pub struct OutlookReport {
    /// The month the horizon starts at
    pub start: MonthKey,
    /// One row per horizon month, in calendar order
    pub rows: Vec<OutlookRow>,
    /// Average monthly income across the months actually recorded
    pub average_income: Money,
    /// Average monthly expenses across the months actually recorded
    pub average_expenses: Money,
    /// Average income minus average expenses
    pub average_net: Money,
    /// Even monthly amount needed for the wedding savings goal
    pub monthly_savings_needed: Money,
    /// What is still unfunded after counting available savings
    pub remaining_after_savings: Money,
    /// Whole months until the wedding, counting the current month
    pub months_remaining: u32,
}

impl OutlookReport {
    /// Generate the outlook for `horizon_months` months starting at the
    /// month containing `reference`
    pub fn generate(state: &FinanceState, reference: NaiveDate, horizon_months: u32) -> Self {
        let start = MonthKey::from_date(reference);
        let months = start.sequence(horizon_months.max(1) as usize);

        let income_totals = project_monthly_totals(&state.incomes, &months, |entry| {
            entry.is_recurring()
        });
        let expense_totals = project_monthly_totals(&state.expenses, &months, |entry| {
            entry.recurs_monthly
        });

        let rows = months
            .iter()
            .map(|month| {
                let income = copied(&income_totals, month);
                let expenses = copied(&expense_totals, month);
                OutlookRow {
                    month: *month,
                    income,
                    expenses,
                    net: income - expenses,
                }
            })
            .collect();

        let average_income = average_monthly_amount(&state.incomes);
        let average_expenses = average_monthly_amount(&state.expenses);

        Self {
            start,
            rows,
            average_income,
            average_expenses,
            average_net: average_income - average_expenses,
            monthly_savings_needed: monthly_savings_need(&state.wedding, reference),
            remaining_after_savings: remaining_after_savings(&state.wedding),
            months_remaining: months_until_wedding(&state.wedding, reference),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}-month outlook from {}\n",
            self.rows.len(),
            self.start.friendly()
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "{:<18} {:>13} {:>13} {:>13}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<18} {:>13} {:>13} {:>13}\n",
                row.month.friendly(),
                row.income.to_string(),
                row.expenses.to_string(),
                row.net.to_string()
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>13} {:>13} {:>13}\n",
            "Average",
            self.average_income.to_string(),
            self.average_expenses.to_string(),
            self.average_net.to_string()
        ));

        let after_wedding = self.average_net - self.monthly_savings_needed;
        output.push('\n');
        output.push_str(&format!(
            "Typical monthly surplus {} against the wedding saving target {} \
             leaves {} each month.\n",
            self.average_net, self.monthly_savings_needed, after_wedding
        ));
        if after_wedding.is_negative() {
            output.push_str("Adjust recurring items if this number stays below zero.\n");
        }

        output
    }

    /// Export the report rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> PlannerResult<()> {
        writeln!(writer, "Month,Income,Expenses,Net")
            .map_err(|e| crate::error::PlannerError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                row.month,
                row.income.pence() as f64 / 100.0,
                row.expenses.pence() as f64 / 100.0,
                row.net.pence() as f64 / 100.0
            )
            .map_err(|e| crate::error::PlannerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

fn copied(totals: &BTreeMap<MonthKey, Money>, month: &MonthKey) -> Money {
    totals.get(month).copied().unwrap_or_else(Money::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseEntry, IncomeEntry, IncomeKind};

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn state() -> FinanceState {
        let mut state = FinanceState::default();
        state.incomes.push(IncomeEntry::new(
            month("2024-01"),
            "Salary",
            Money::from_pence(200000),
            IncomeKind::Salary,
        ));
        state.expenses.push(
            ExpenseEntry::new(
                month("2024-01"),
                "Mortgage",
                Money::from_pence(120000),
                ExpenseCategory::HouseRecurring,
            )
            .recurring(),
        );
        state.expenses.push(ExpenseEntry::new(
            month("2024-02"),
            "Boiler repair",
            Money::from_pence(45000),
            ExpenseCategory::HouseOneOff,
        ));
        state
    }

    #[test]
    fn test_generate_projects_recurring_entries() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = OutlookReport::generate(&state(), reference, 3);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].month, month("2024-01"));

        // Salary and mortgage recur; the repair lands only in February.
        assert_eq!(report.rows[0].net, Money::from_pence(80000));
        assert_eq!(report.rows[1].net, Money::from_pence(35000));
        assert_eq!(report.rows[2].net, Money::from_pence(80000));
    }

    #[test]
    fn test_averages_use_recorded_months_only() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = OutlookReport::generate(&state(), reference, 12);

        // Income recorded in one month; expenses across two.
        assert_eq!(report.average_income, Money::from_pence(200000));
        assert_eq!(report.average_expenses, Money::from_pence(82500));
        assert_eq!(report.average_net, Money::from_pence(117500));
    }

    #[test]
    fn test_format_terminal_mentions_every_month() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = OutlookReport::generate(&state(), reference, 3);
        let text = report.format_terminal();

        assert!(text.contains("January 2024"));
        assert!(text.contains("February 2024"));
        assert!(text.contains("March 2024"));
        assert!(text.contains("Average"));
    }

    #[test]
    fn test_export_csv() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = OutlookReport::generate(&state(), reference, 2);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Month,Income,Expenses,Net"));
        assert!(csv.contains("2024-01,2000.00,1200.00,800.00"));
    }

    #[test]
    fn test_horizon_of_zero_is_clamped_to_one() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = OutlookReport::generate(&state(), reference, 0);
        assert_eq!(report.rows.len(), 1);
    }
}
