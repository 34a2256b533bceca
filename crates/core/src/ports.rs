//! Port interfaces for the shared entry store
//!
//! These traits define the boundary between core business logic and the
//! storage implementation. The store is always passed in explicitly
//! (dependency injection); there is no ambient global state.

use chrono::NaiveDate;
use workgraph_domain::{EntryPatch, Result, TimeEntry};

/// Keyed store of time entries over `(user_id, date)`.
///
/// The single source of truth consumed by both the entry-side and the
/// approval-side flows. Implementations are synchronous and single-writer;
/// callers run in one event-driven context and operations complete in one
/// step.
pub trait EntryStore: Send + Sync {
    /// Append an entry to the list for its `(user_id, date)` key.
    fn add_entry(&self, entry: TimeEntry) -> Result<()>;

    /// Locate an entry by id across all keys and merge the patch into it.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id so callers can detect programming
    /// errors instead of a silent no-op.
    fn update_entry(&self, entry_id: &str, patch: &EntryPatch) -> Result<()>;

    /// Remove an entry by id from whichever key holds it.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    fn delete_entry(&self, entry_id: &str) -> Result<()>;

    /// Entries for one person on one calendar day.
    fn entries_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TimeEntry>>;

    /// Entries for one person within an inclusive date range, sorted
    /// ascending by date.
    fn entries_for_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>>;
}
