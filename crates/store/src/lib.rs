//! # Workgraph Store
//!
//! In-memory implementation of the shared entry store port.
//!
//! This is the single source of truth the entry-side and approval-side flows
//! share: a keyed store over `(user_id, date)`, mutated by contributor
//! actions and read by both sides. Persistence lives behind an external
//! backend outside this workspace; this crate only holds the working set.

pub mod memory;

pub use memory::InMemoryEntryStore;
