//! Approval-side types
//!
//! A [`TimesheetPeriod`] is one person's entries for one bounded date range,
//! with approval metadata: status, flags, day groups, and the append-only
//! audit trail. Status transitions are driven only by explicit actions (see
//! `workgraph-core`); nothing here moves by time or background computation.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::TimeEntry;

/// Review status of a whole period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    Draft,
    Submitted,
    /// Previously approved, since edited by the contributor; needs re-review.
    Amended,
    /// Some day groups approved, others still awaiting review.
    Partial,
    Approved,
    Rejected,
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Amended => "amended",
            Self::Partial => "partial",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Review status of one day group inside a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Submitted,
    Approved,
    Rejected,
}

/// Role of the actor recorded on an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Contributor,
    Approver,
}

/// Approval-chain action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Submit,
    Approve,
    Reject,
    RequestChanges,
    Recall,
    Amend,
    ApproveDay,
    RejectDay,
    ApproveEntry,
    RejectEntry,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestChanges => "request_changes",
            Self::Recall => "recall",
            Self::Amend => "amend",
            Self::ApproveDay => "approve_day",
            Self::RejectDay => "reject_day",
            Self::ApproveEntry => "approve_entry",
            Self::RejectEntry => "reject_entry",
        };
        f.write_str(s)
    }
}

/// Immutable log record of one approval-chain action. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: AuditAction,
    pub actor: String,
    pub role: ActorRole,
    pub at: DateTime<Utc>,
    pub comment: Option<String>,
}

impl AuditEntry {
    /// Record a new audit entry for an action taken now.
    pub fn record(
        action: AuditAction,
        actor: &str,
        role: ActorRole,
        at: DateTime<Utc>,
        comment: Option<String>,
    ) -> Self {
        Self { id: Uuid::now_v7().to_string(), action, actor: actor.to_string(), role, at, comment }
    }
}

/// Data-quality flags computed when a period is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFlags {
    pub has_weekend: bool,
    pub has_holiday: bool,
    pub over_daily_limit: bool,
    pub missing_tasks: bool,
    pub outside_contract: bool,
}

/// One calendar day inside a period, approvable as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
    pub status: DayStatus,
}

/// One person's entries for one period, with approval metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetPeriod {
    pub person_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,

    pub total_hours: f64,
    pub overtime_hours: f64,
    pub estimated_cost: f64,

    pub status: PeriodStatus,
    pub submitted_at: Option<DateTime<Utc>>,

    /// Review deadline. Immutable once set.
    pub due_at: Option<DateTime<Utc>>,

    pub flags: PeriodFlags,
    pub day_groups: Vec<DayGroup>,
    pub audit_trail: Vec<AuditEntry>,
}

impl TimesheetPeriod {
    /// Whether this period is waiting on an approver.
    pub fn is_pending_review(&self) -> bool {
        matches!(self.status, PeriodStatus::Submitted | PeriodStatus::Amended | PeriodStatus::Partial)
    }

    /// Day group for the given date, if the period covers it.
    pub fn day_group(&self, date: NaiveDate) -> Option<&DayGroup> {
        self.day_groups.iter().find(|d| d.date == date)
    }

    /// Mutable day group for the given date.
    pub fn day_group_mut(&mut self, date: NaiveDate) -> Option<&mut DayGroup> {
        self.day_groups.iter_mut().find(|d| d.date == date)
    }
}
