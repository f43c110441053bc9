//! Income service
//!
//! Business logic for recording and removing income entries. Validation
//! happens here, before anything reaches the data files: recorded amounts
//! must be strictly positive, and blank descriptions get a sensible default.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{IncomeEntry, IncomeKind, Money, MonthKey};
use crate::storage::Storage;

/// Service for income entry management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an income entry for a month
    pub fn add(
        &self,
        month: MonthKey,
        description: &str,
        amount: Money,
        kind: IncomeKind,
    ) -> PlannerResult<IncomeEntry> {
        validate_amount(amount)?;

        let description = normalize_description(description, "Salary");
        let entry = IncomeEntry::new(month, description, amount, kind);

        self.storage.finance.add_income(entry.clone())?;
        self.storage.finance.save()?;

        info!(id = %entry.id, month = %entry.month, "recorded income entry");
        Ok(entry)
    }

    /// All income entries
    pub fn list(&self) -> PlannerResult<Vec<IncomeEntry>> {
        self.storage.finance.incomes()
    }

    /// Income entries for one month, in recorded order
    pub fn list_for_month(&self, month: MonthKey) -> PlannerResult<Vec<IncomeEntry>> {
        Ok(self
            .storage
            .finance
            .incomes()?
            .into_iter()
            .filter(|entry| entry.month == month)
            .collect())
    }

    /// Remove an income entry by id (full UUID or short form)
    pub fn remove(&self, id: &str) -> PlannerResult<IncomeEntry> {
        let entries = self.storage.finance.incomes()?;
        let matches: Vec<_> = entries
            .iter()
            .filter(|entry| entry.id.matches(id))
            .collect();

        let entry = match matches.as_slice() {
            [] => return Err(PlannerError::income_not_found(id)),
            [single] => (*single).clone(),
            _ => {
                return Err(PlannerError::Validation(format!(
                    "Ambiguous income id: {}",
                    id
                )))
            }
        };

        self.storage.finance.remove_income(entry.id)?;
        self.storage.finance.save()?;

        info!(id = %entry.id, "removed income entry");
        Ok(entry)
    }
}

/// Reject non-positive amounts at the input boundary
///
/// The engine itself stays total on any amount, but nothing unvalidated is
/// allowed into the data files.
pub(crate) fn validate_amount(amount: Money) -> PlannerResult<()> {
    if !amount.is_positive() {
        return Err(PlannerError::Validation(format!(
            "Amount must be greater than zero, got {}",
            amount
        )));
    }
    Ok(())
}

/// Trim a description, substituting a default for blank input
pub(crate) fn normalize_description(description: &str, default: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlannerPaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        service
            .add(month("2024-01"), "Salary", Money::from_pence(200000), IncomeKind::Salary)
            .unwrap();
        service
            .add(month("2024-02"), "Bonus", Money::from_pence(50000), IncomeKind::Bonus)
            .unwrap();

        assert_eq!(service.list().unwrap().len(), 2);
        assert_eq!(service.list_for_month(month("2024-01")).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        let err = service
            .add(month("2024-01"), "Salary", Money::zero(), IncomeKind::Salary)
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add(month("2024-01"), "Salary", Money::from_pence(-100), IncomeKind::Salary)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_description_defaults() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        let entry = service
            .add(month("2024-01"), "   ", Money::from_pence(100000), IncomeKind::Salary)
            .unwrap();
        assert_eq!(entry.description, "Salary");
    }

    #[test]
    fn test_remove_by_short_id() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        let entry = service
            .add(month("2024-01"), "Salary", Money::from_pence(100000), IncomeKind::Salary)
            .unwrap();

        let removed = service.remove(&entry.id.to_string()).unwrap();
        assert_eq!(removed.id, entry.id);
        assert!(service.list().unwrap().is_empty());

        assert!(service.remove("inc-00000000").unwrap_err().is_not_found());
    }
}
