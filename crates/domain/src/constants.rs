//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! timesheet core.

/// Hard ceiling on logged hours for one person on one calendar day.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Default review period length (one week).
pub const DEFAULT_PERIOD_DAYS: i64 = 7;

/// Hours an approver has to review a submitted period before it is overdue.
pub const DEFAULT_REVIEW_WINDOW_HOURS: i64 = 72;

/// Window ahead of the due date in which a period counts as "due soon".
pub const DEFAULT_DUE_SOON_WINDOW_HOURS: i64 = 48;
