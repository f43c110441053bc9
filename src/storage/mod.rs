//! Storage layer for the planner
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod finance;

pub use file_io::{load_json, store_json_atomic};
pub use finance::{BudgetItemUpdate, FinanceRepository};

use crate::config::paths::PlannerPaths;
use crate::error::PlannerError;

/// Main storage coordinator
pub struct Storage {
    paths: PlannerPaths,
    pub finance: FinanceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PlannerPaths) -> Result<Self, PlannerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            finance: FinanceRepository::new(paths.finance_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PlannerError> {
        self.finance.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PlannerError> {
        self.finance.save()
    }
}
