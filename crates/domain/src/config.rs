//! Configuration structures for the approval workflow

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DUE_SOON_WINDOW_HOURS, DEFAULT_PERIOD_DAYS, DEFAULT_REVIEW_WINDOW_HOURS,
};

/// Configuration for period assembly and approval-queue ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalConfig {
    /// Review period length in days (default: 7 = one week)
    pub period_length_days: i64,

    /// Hours between submission-period end and the review due date
    /// (default: 72)
    pub review_window_hours: i64,

    /// Hours ahead of the due date in which a period is "due soon"
    /// (default: 48)
    pub due_soon_window_hours: i64,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            period_length_days: DEFAULT_PERIOD_DAYS,
            review_window_hours: DEFAULT_REVIEW_WINDOW_HOURS,
            due_soon_window_hours: DEFAULT_DUE_SOON_WINDOW_HOURS,
        }
    }
}
