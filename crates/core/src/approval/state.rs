//! Period state machine
//!
//! `Draft -> Submitted -> { Approved | Rejected | Partial }`, with `Amended`
//! reachable only from `Approved` via an explicit amend. Transitions are
//! driven solely by contributor/approver actions, never by time or
//! background computation, and every transition appends exactly one
//! immutable audit entry.
//!
//! Invalid transitions fail loudly with `InvalidTransition` naming the
//! current state and the attempted action: they indicate a logic bug in the
//! caller, not a data-quality issue.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::info;
use workgraph_domain::{
    ActorRole, ApprovalConfig, AuditAction, AuditEntry, DayGroup, DayStatus, EntryStatus,
    PeriodStatus, Result, TimeEntry, TimesheetPeriod, WorkgraphError,
};

/// Submit a period for review. Allowed from `Draft` and `Rejected`
/// (resubmission after a rejection).
///
/// Sets `submitted_at` and, on first submission only, the review due date;
/// `due_at` is immutable once set.
pub fn submit(
    period: &mut TimesheetPeriod,
    actor: &str,
    now: DateTime<Utc>,
    config: &ApprovalConfig,
) -> Result<()> {
    match period.status {
        PeriodStatus::Draft | PeriodStatus::Rejected => {}
        _ => return Err(invalid(period.status, AuditAction::Submit)),
    }

    set_all(period, DayStatus::Submitted, EntryStatus::Submitted);
    period.status = PeriodStatus::Submitted;
    period.submitted_at = Some(now);
    if period.due_at.is_none() {
        period.due_at = Some(review_due_at(period.period_end, config));
    }
    record(period, AuditAction::Submit, actor, ActorRole::Contributor, now, None);
    Ok(())
}

/// Approve every day group in a pending-review period.
pub fn approve(
    period: &mut TimesheetPeriod,
    actor: &str,
    now: DateTime<Utc>,
    comment: Option<&str>,
) -> Result<()> {
    ensure_pending_review(period, AuditAction::Approve)?;

    set_all(period, DayStatus::Approved, EntryStatus::Approved);
    period.status = PeriodStatus::Approved;
    record(period, AuditAction::Approve, actor, ActorRole::Approver, now, owned(comment));
    Ok(())
}

/// Reject every day group in a pending-review period. Requires a reason.
pub fn reject(
    period: &mut TimesheetPeriod,
    actor: &str,
    now: DateTime<Utc>,
    reason: &str,
) -> Result<()> {
    require_reason(reason, AuditAction::Reject)?;
    ensure_pending_review(period, AuditAction::Reject)?;

    set_all(period, DayStatus::Rejected, EntryStatus::Rejected);
    period.status = PeriodStatus::Rejected;
    record(period, AuditAction::Reject, actor, ActorRole::Approver, now, Some(reason.to_string()));
    Ok(())
}

/// Send a pending-review period back to the contributor for edits.
/// Requires a reason.
pub fn request_changes(
    period: &mut TimesheetPeriod,
    actor: &str,
    now: DateTime<Utc>,
    reason: &str,
) -> Result<()> {
    require_reason(reason, AuditAction::RequestChanges)?;
    ensure_pending_review(period, AuditAction::RequestChanges)?;

    set_all(period, DayStatus::Submitted, EntryStatus::Draft);
    period.status = PeriodStatus::Draft;
    record(
        period,
        AuditAction::RequestChanges,
        actor,
        ActorRole::Approver,
        now,
        Some(reason.to_string()),
    );
    Ok(())
}

/// Contributor pulls a submitted period back before any review happened.
/// Only allowed from `Submitted`; once a day has been acted on the period
/// belongs to the approver.
pub fn recall(period: &mut TimesheetPeriod, actor: &str, now: DateTime<Utc>) -> Result<()> {
    if period.status != PeriodStatus::Submitted {
        return Err(invalid(period.status, AuditAction::Recall));
    }

    set_all(period, DayStatus::Submitted, EntryStatus::Draft);
    period.status = PeriodStatus::Draft;
    record(period, AuditAction::Recall, actor, ActorRole::Contributor, now, None);
    Ok(())
}

/// Reopen an approved period after a contributor edit, requiring re-review.
///
/// The only way out of `Approved`. Appends exactly one audit entry and
/// leaves the existing trail untouched.
pub fn amend(
    period: &mut TimesheetPeriod,
    actor: &str,
    now: DateTime<Utc>,
    comment: Option<&str>,
) -> Result<()> {
    if period.status != PeriodStatus::Approved {
        return Err(invalid(period.status, AuditAction::Amend));
    }

    for day in &mut period.day_groups {
        day.status = DayStatus::Submitted;
    }
    period.status = PeriodStatus::Amended;
    record(period, AuditAction::Amend, actor, ActorRole::Contributor, now, owned(comment));
    Ok(())
}

/// Approve a single day group within a pending-review period.
pub fn approve_day(
    period: &mut TimesheetPeriod,
    date: NaiveDate,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    ensure_pending_review(period, AuditAction::ApproveDay)?;

    let day = require_day(period, date)?;
    day.status = DayStatus::Approved;
    for entry in &mut day.entries {
        entry.status = EntryStatus::Approved;
    }
    period.status = derived_status(period.status, &period.day_groups);
    record(period, AuditAction::ApproveDay, actor, ActorRole::Approver, now, None);
    Ok(())
}

/// Reject a single day group within a pending-review period. Requires a
/// reason.
pub fn reject_day(
    period: &mut TimesheetPeriod,
    date: NaiveDate,
    actor: &str,
    now: DateTime<Utc>,
    reason: &str,
) -> Result<()> {
    require_reason(reason, AuditAction::RejectDay)?;
    ensure_pending_review(period, AuditAction::RejectDay)?;

    let day = require_day(period, date)?;
    day.status = DayStatus::Rejected;
    for entry in &mut day.entries {
        entry.status = EntryStatus::Rejected;
    }
    period.status = derived_status(period.status, &period.day_groups);
    record(period, AuditAction::RejectDay, actor, ActorRole::Approver, now, Some(reason.to_string()));
    Ok(())
}

/// Approve a single entry; its day group and the period re-derive their
/// status from the entries.
pub fn approve_entry(
    period: &mut TimesheetPeriod,
    entry_id: &str,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    ensure_pending_review(period, AuditAction::ApproveEntry)?;

    set_entry_status(period, entry_id, EntryStatus::Approved)?;
    period.status = derived_status(period.status, &period.day_groups);
    record(period, AuditAction::ApproveEntry, actor, ActorRole::Approver, now, None);
    Ok(())
}

/// Reject a single entry. Requires a reason.
pub fn reject_entry(
    period: &mut TimesheetPeriod,
    entry_id: &str,
    actor: &str,
    now: DateTime<Utc>,
    reason: &str,
) -> Result<()> {
    require_reason(reason, AuditAction::RejectEntry)?;
    ensure_pending_review(period, AuditAction::RejectEntry)?;

    set_entry_status(period, entry_id, EntryStatus::Rejected)?;
    period.status = derived_status(period.status, &period.day_groups);
    record(
        period,
        AuditAction::RejectEntry,
        actor,
        ActorRole::Approver,
        now,
        Some(reason.to_string()),
    );
    Ok(())
}

/// Review deadline: the review window starts when the period closes.
fn review_due_at(period_end: NaiveDate, config: &ApprovalConfig) -> DateTime<Utc> {
    (period_end + Duration::days(1)).and_time(NaiveTime::MIN).and_utc()
        + Duration::hours(config.review_window_hours)
}

fn invalid(state: PeriodStatus, action: AuditAction) -> WorkgraphError {
    WorkgraphError::InvalidTransition { state: state.to_string(), action: action.to_string() }
}

fn ensure_pending_review(period: &TimesheetPeriod, action: AuditAction) -> Result<()> {
    if period.is_pending_review() {
        Ok(())
    } else {
        Err(invalid(period.status, action))
    }
}

fn require_reason(reason: &str, action: AuditAction) -> Result<()> {
    if reason.trim().is_empty() {
        Err(WorkgraphError::InvalidInput(format!("{action} requires a non-empty reason")))
    } else {
        Ok(())
    }
}

fn require_day(period: &mut TimesheetPeriod, date: NaiveDate) -> Result<&mut DayGroup> {
    let person = period.person_id.clone();
    period
        .day_group_mut(date)
        .ok_or_else(|| WorkgraphError::NotFound(format!("no day group for {date} in {person}'s period")))
}

fn set_all(period: &mut TimesheetPeriod, day_status: DayStatus, entry_status: EntryStatus) {
    for day in &mut period.day_groups {
        day.status = day_status;
        for entry in &mut day.entries {
            entry.status = entry_status;
        }
    }
}

fn set_entry_status(period: &mut TimesheetPeriod, entry_id: &str, status: EntryStatus) -> Result<()> {
    for day in &mut period.day_groups {
        if let Some(entry) = day.entries.iter_mut().find(|e| e.id == entry_id) {
            entry.status = status;
            day.status = derived_day_status(&day.entries);
            return Ok(());
        }
    }
    Err(WorkgraphError::NotFound(format!("entry {entry_id} not in period")))
}

/// Day status follows its entries: unanimous verdicts settle the day,
/// anything mixed stays awaiting review.
fn derived_day_status(entries: &[TimeEntry]) -> DayStatus {
    if !entries.is_empty() && entries.iter().all(|e| e.status == EntryStatus::Approved) {
        DayStatus::Approved
    } else if !entries.is_empty() && entries.iter().all(|e| e.status == EntryStatus::Rejected) {
        DayStatus::Rejected
    } else {
        DayStatus::Submitted
    }
}

/// Period status follows its day groups: all approved / all rejected settle
/// the period, a mix of settled and submitted days is `Partial`.
fn derived_status(current: PeriodStatus, days: &[DayGroup]) -> PeriodStatus {
    if days.is_empty() {
        return current;
    }
    let approved = days.iter().filter(|d| d.status == DayStatus::Approved).count();
    let rejected = days.iter().filter(|d| d.status == DayStatus::Rejected).count();

    if approved == days.len() {
        PeriodStatus::Approved
    } else if rejected == days.len() {
        PeriodStatus::Rejected
    } else if approved + rejected > 0 {
        PeriodStatus::Partial
    } else {
        current
    }
}

fn record(
    period: &mut TimesheetPeriod,
    action: AuditAction,
    actor: &str,
    role: ActorRole,
    now: DateTime<Utc>,
    comment: Option<String>,
) {
    info!(person_id = %period.person_id, action = %action, status = %period.status, "period transition");
    period.audit_trail.push(AuditEntry::record(action, actor, role, now, comment));
}

fn owned(comment: Option<&str>) -> Option<String> {
    comment.map(str::to_string)
}
