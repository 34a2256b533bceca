//! Time entry types
//!
//! A [`TimeEntry`] is one unit of logged work: one person, one calendar day,
//! one task, a number of hours. Entries are the raw input to contract
//! matching and grouping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of logged time, affecting the applicable rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Regular,
    Travel,
    Overtime,
    Oncall,
}

/// Lifecycle status of a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Pending,
}

/// Who the entry is billed through.
///
/// Replaces a loosely-optional `organization_id` field with a tagged variant
/// so contract matching can branch exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attribution {
    /// Work billed under the person's own contract.
    Individual,
    /// Work attributed to an organization roster (company or agency).
    Organization { organization_id: String },
}

/// One unit of logged work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier (UUID v7 text)
    pub id: String,

    /// Owning person
    pub user_id: String,

    /// Billing attribution (individual contract or organization roster)
    pub attribution: Attribution,

    /// Calendar day the work was performed
    pub date: NaiveDate,

    /// Logged hours, non-negative
    pub hours: f64,

    /// Work category driving rate resolution
    pub work_type: WorkType,

    /// Free-text task description
    pub task: String,

    /// Entry lifecycle status
    pub status: EntryStatus,
}

impl TimeEntry {
    /// Create a new draft entry with individual attribution.
    pub fn new(user_id: &str, date: NaiveDate, hours: f64, work_type: WorkType, task: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            attribution: Attribution::Individual,
            date,
            hours,
            work_type,
            task: task.to_string(),
            status: EntryStatus::Draft,
        }
    }

    /// Attribute this entry to an organization roster.
    #[must_use]
    pub fn with_organization(mut self, organization_id: &str) -> Self {
        self.attribution = Attribution::Organization { organization_id: organization_id.to_string() };
        self
    }

    /// Whether the contributor may still edit or delete this entry.
    ///
    /// Only unsubmitted drafts are editable; everything past submission is
    /// owned by the approval flow.
    pub fn is_editable(&self) -> bool {
        self.status == EntryStatus::Draft
    }
}

/// Partial update applied to an existing entry by id.
///
/// `None` fields are left untouched. A `date` change re-keys the entry in the
/// store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub work_type: Option<WorkType>,
    pub task: Option<String>,
    pub status: Option<EntryStatus>,
}

impl EntryPatch {
    /// Apply this patch to an entry in place.
    pub fn apply_to(&self, entry: &mut TimeEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(hours) = self.hours {
            entry.hours = hours;
        }
        if let Some(work_type) = self.work_type {
            entry.work_type = work_type;
        }
        if let Some(task) = &self.task {
            entry.task = task.clone();
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
    }
}
