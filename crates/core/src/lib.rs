//! # Workgraph Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Rate resolution and contract matching
//! - The contract grouping engine
//! - The period state machine and approval queue builder
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `workgraph-domain`
//! - No database, HTTP, or platform code
//! - All external collaborators via traits
//! - Synchronous throughout: every operation is a pure function over its
//!   inputs and completes in one step

pub mod approval;
pub mod grouping;
pub mod matching;
pub mod ports;
pub mod rates;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use approval::builder::PeriodBuilder;
pub use approval::queue::{
    approve_all, queue_counters, review_queue, BulkFailure, BulkOutcome, QueueCounters,
};
pub use grouping::GroupingEngine;
pub use matching::find_contract;
pub use ports::EntryStore;
pub use rates::resolve_rate;
pub use validation::{validate_entry_deletable, validate_new_entry};
