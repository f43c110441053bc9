//! Business logic layer
//!
//! Services bridge the CLI and the storage layer: they validate input,
//! resolve user-supplied ids, and decide when state is persisted. Derived
//! figures come from the `engine` module, never from the services.

pub mod expense;
pub mod income;
pub mod wedding;

pub use expense::ExpenseService;
pub use income::IncomeService;
pub use wedding::WeddingService;
