//! Derived grouping types
//!
//! [`ContractGroup`] is the unit of approval: every entry governed by one
//! contract within the queried window, with aggregated totals. Groups are
//! computed fresh on every grouping call and never mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contract::Contract;
use super::entry::TimeEntry;
use super::party::PartyKind;

/// Hourly rate resolved for one (contract, work type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRate {
    pub rate: f64,

    /// True when no work-type rate was configured and the base rate was
    /// assumed. A data-quality signal, not an error.
    pub assumed: bool,
}

/// Inclusive date span covered by a group's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// An entry no contract governs. Reported alongside the grouped result,
/// never silently dropped from totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignableEntry {
    pub entry_id: String,
    pub user_id: String,
    pub date: NaiveDate,
}

/// Aggregation of all entries governed by one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractGroup {
    pub contract: Contract,
    pub contract_kind: PartyKind,

    /// Entries in input order
    pub entries: Vec<TimeEntry>,

    /// Distinct user ids, first-seen order
    pub people: Vec<String>,

    pub total_hours: f64,
    pub total_amount: f64,
    pub week_range: WeekRange,

    /// Provider name; organizational contracts carry a contractor count
    pub display_name: String,

    /// "$R/hr", with " blended" appended for organizational contracts
    pub rate_label: String,

    /// True when any line item fell back to the base hourly rate
    pub rate_assumed: bool,
}

/// Result of one grouping call: the groups plus everything that could not be
/// assigned to a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingOutcome {
    pub groups: Vec<ContractGroup>,
    pub unassignable: Vec<UnassignableEntry>,
}

impl GroupingOutcome {
    /// Hours that made it into a group.
    pub fn grouped_hours(&self) -> f64 {
        self.groups.iter().map(|g| g.total_hours).sum()
    }

    /// Whether every input entry found a governing contract.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassignable.is_empty()
    }
}
