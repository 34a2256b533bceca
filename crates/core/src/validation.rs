//! Entry-boundary validation
//!
//! Enforced where entries are created or deleted, not inside the store; the
//! store itself stays a plain keyed container.

use workgraph_domain::{constants::MAX_DAILY_HOURS, Result, TimeEntry, WorkgraphError};

/// Validate a new entry against the other entries already logged for the
/// same person and day.
///
/// # Errors
/// `InvalidInput` when hours are negative or not finite, or when the day's
/// total would exceed the 24-hour ceiling.
pub fn validate_new_entry(entry: &TimeEntry, same_day: &[TimeEntry]) -> Result<()> {
    if !entry.hours.is_finite() || entry.hours < 0.0 {
        return Err(WorkgraphError::InvalidInput(format!(
            "hours must be a non-negative number, got {}",
            entry.hours
        )));
    }

    let day_total: f64 =
        same_day.iter().filter(|e| e.id != entry.id).map(|e| e.hours).sum::<f64>() + entry.hours;
    if day_total > MAX_DAILY_HOURS {
        return Err(WorkgraphError::InvalidInput(format!(
            "daily total of {day_total} hours exceeds the {MAX_DAILY_HOURS}-hour limit for {}",
            entry.date
        )));
    }

    Ok(())
}

/// Validate that an entry may be deleted.
///
/// Deletion is only defined for unsubmitted drafts; approved entries are
/// soft-state and everything past submission belongs to the approval flow.
///
/// # Errors
/// `InvalidInput` when the entry is not an editable draft.
pub fn validate_entry_deletable(entry: &TimeEntry) -> Result<()> {
    if entry.is_editable() {
        Ok(())
    } else {
        Err(WorkgraphError::InvalidInput(format!(
            "entry {} cannot be deleted once submitted",
            entry.id
        )))
    }
}
