//! In-memory `EntryStore` implementation
//!
//! A keyed map over `(user_id, date)` behind a `parking_lot::RwLock`. The
//! lock makes the handle shareable; it is not a concurrency story. Callers
//! run in a single-threaded, event-driven context and every operation
//! completes in one step.
//!
//! Unknown ids on update/delete come back as `NotFound` so callers can
//! assert success instead of losing writes to a silent no-op.

use ahash::AHashMap;
use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::debug;
use workgraph_core::EntryStore;
use workgraph_domain::{EntryPatch, Result, TimeEntry, WorkgraphError};

type EntryKey = (String, NaiveDate);

/// In-memory keyed store of time entries.
#[derive(Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<AHashMap<EntryKey, Vec<TimeEntry>>>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across all keys.
    pub fn len(&self) -> usize {
        self.entries.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().values().all(Vec::is_empty)
    }
}

/// Key and in-list position of an entry, searched across all keys.
fn locate(map: &AHashMap<EntryKey, Vec<TimeEntry>>, entry_id: &str) -> Option<(EntryKey, usize)> {
    for (key, list) in map {
        if let Some(idx) = list.iter().position(|e| e.id == entry_id) {
            return Some((key.clone(), idx));
        }
    }
    None
}

impl EntryStore for InMemoryEntryStore {
    fn add_entry(&self, entry: TimeEntry) -> Result<()> {
        debug!(entry_id = %entry.id, user_id = %entry.user_id, date = %entry.date, "add entry");
        let mut map = self.entries.write();
        map.entry((entry.user_id.clone(), entry.date)).or_default().push(entry);
        Ok(())
    }

    fn update_entry(&self, entry_id: &str, patch: &EntryPatch) -> Result<()> {
        let mut map = self.entries.write();
        let (key, idx) = locate(&map, entry_id)
            .ok_or_else(|| WorkgraphError::NotFound(format!("entry {entry_id}")))?;

        let date_changed = patch.date.is_some_and(|d| d != key.1);
        if date_changed {
            // Re-key: pull the entry out, patch it, file it under its new day
            let mut entry = match map.get_mut(&key) {
                Some(list) => list.remove(idx),
                None => return Err(WorkgraphError::Internal("located key vanished".to_string())),
            };
            if map.get(&key).is_some_and(Vec::is_empty) {
                map.remove(&key);
            }
            patch.apply_to(&mut entry);
            debug!(entry_id, from = %key.1, to = %entry.date, "entry moved to a new day");
            map.entry((entry.user_id.clone(), entry.date)).or_default().push(entry);
        } else if let Some(entry) = map.get_mut(&key).and_then(|list| list.get_mut(idx)) {
            patch.apply_to(entry);
            debug!(entry_id, "entry updated in place");
        }

        Ok(())
    }

    fn delete_entry(&self, entry_id: &str) -> Result<()> {
        let mut map = self.entries.write();
        let (key, idx) = locate(&map, entry_id)
            .ok_or_else(|| WorkgraphError::NotFound(format!("entry {entry_id}")))?;

        if let Some(list) = map.get_mut(&key) {
            list.remove(idx);
        }
        if map.get(&key).is_some_and(Vec::is_empty) {
            map.remove(&key);
        }
        debug!(entry_id, user_id = %key.0, date = %key.1, "entry deleted");
        Ok(())
    }

    fn entries_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let map = self.entries.read();
        Ok(map.get(&(user_id.to_string(), date)).cloned().unwrap_or_default())
    }

    fn entries_for_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        let map = self.entries.read();
        let mut entries: Vec<TimeEntry> = map
            .iter()
            .filter(|((user, date), _)| user == user_id && *date >= start && *date <= end)
            .flat_map(|(_, list)| list.iter().cloned())
            .collect();

        // Ascending by date; id as tie-break so equal-day order is stable
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }
}
