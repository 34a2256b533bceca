//! # Workgraph Domain
//!
//! Business domain types and models for the timesheet core.
//!
//! This crate contains:
//! - Domain data types (TimeEntry, Contract, ContractGroup, TimesheetPeriod)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and calendar utilities
//!
//! ## Architecture
//! - No dependencies on other workgraph crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export calendar/formatting helpers
pub use utils::period::{format_rate, is_weekend, round_currency, week_end, week_start};
