//! Approval queue building
//!
//! Pure derived views over a set of periods: ranking for display, counters
//! for the queue header, and bulk approval. Nothing here is stored;
//! `due_soon`/`overdue` are recomputed on every read from `due_at` against a
//! caller-supplied clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use workgraph_domain::{ApprovalConfig, PeriodStatus, TimesheetPeriod, WorkgraphError};

use super::state;

/// Header counters for an approval queue view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounters {
    pub due_soon: usize,
    pub overdue: usize,
    pub submitted: usize,
    pub amended: usize,
}

/// Compute queue counters for `now`.
pub fn queue_counters(
    periods: &[TimesheetPeriod],
    now: DateTime<Utc>,
    config: &ApprovalConfig,
) -> QueueCounters {
    let soon_cutoff = now + Duration::hours(config.due_soon_window_hours);
    let mut counters = QueueCounters::default();

    for period in periods {
        match period.status {
            PeriodStatus::Submitted => counters.submitted += 1,
            PeriodStatus::Amended => counters.amended += 1,
            _ => {}
        }
        if !period.is_pending_review() {
            continue;
        }
        if let Some(due_at) = period.due_at {
            if due_at < now {
                counters.overdue += 1;
            } else if due_at <= soon_cutoff {
                counters.due_soon += 1;
            }
        }
    }

    counters
}

/// Periods awaiting review, most urgent first: ascending `due_at` (periods
/// without a due date last), then person id for a stable total order.
pub fn review_queue(periods: &[TimesheetPeriod]) -> Vec<&TimesheetPeriod> {
    let mut queue: Vec<&TimesheetPeriod> =
        periods.iter().filter(|p| p.is_pending_review()).collect();

    queue.sort_by(|a, b| {
        match (a.due_at, b.due_at) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| a.person_id.cmp(&b.person_id))
    });

    queue
}

/// One period that failed bulk approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkFailure {
    pub person_id: String,
    pub error: WorkgraphError,
}

/// Result of a bulk approve over a queue view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Person ids of periods that transitioned to approved
    pub approved: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

/// Approve every period in the view, independently.
///
/// Applies the same single-period approval to each period; one failure never
/// blocks the rest, there is no atomicity across periods. Failures come
/// back paired with their person id.
pub fn approve_all(
    periods: &mut [TimesheetPeriod],
    actor: &str,
    now: DateTime<Utc>,
) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();

    for period in periods.iter_mut() {
        match state::approve(period, actor, now, None) {
            Ok(()) => outcome.approved.push(period.person_id.clone()),
            Err(error) => {
                warn!(person_id = %period.person_id, %error, "bulk approval skipped period");
                outcome.failed.push(BulkFailure { person_id: period.person_id.clone(), error });
            }
        }
    }

    outcome
}
