//! Nestegg - Terminal-based wedding and household finance planner
//!
//! This library provides the core functionality for the Nestegg planner.
//! A household records income entries, expense entries, and wedding-savings
//! contributions and budget items; the projection engine derives monthly
//! and aggregate views from them: month-indexed totals, recurring-item
//! projections across a forward horizon, and savings-target arithmetic.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (month keys, money, income, expenses, wedding plan)
//! - `engine`: The projection engine - pure calculation functions
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (validation, persistence orchestration)
//! - `reports`: Derived reports with terminal and CSV rendering
//! - `cli`: Command-line handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use nestegg::config::{paths::PlannerPaths, settings::Settings};
//! use nestegg::storage::Storage;
//!
//! let paths = PlannerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::PlannerError;
