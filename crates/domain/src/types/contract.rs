//! Contract types
//!
//! A [`Contract`] is the commercial agreement governing a set of time
//! entries: provider (person or organization), recipient, and the rate card
//! used to price logged hours. Contracts are created and updated by
//! administrative flows outside this core and are read-only here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::WorkType;
use super::party::PartyKind;

/// Contract lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    Active,
    Expired,
    Terminated,
}

/// Per-work-type hourly rates.
///
/// A missing rate falls back to the contract's base hourly rate at
/// resolution time; it is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkTypeRates {
    pub regular: Option<f64>,
    pub travel: Option<f64>,
    pub overtime: Option<f64>,
    pub oncall: Option<f64>,
}

impl WorkTypeRates {
    /// Rate configured for the given work type, if any.
    pub fn rate_for(&self, work_type: WorkType) -> Option<f64> {
        match work_type {
            WorkType::Regular => self.regular,
            WorkType::Travel => self.travel,
            WorkType::Overtime => self.overtime,
            WorkType::Oncall => self.oncall,
        }
    }
}

/// Commercial agreement fixing rates between a provider and a recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier
    pub id: String,

    /// Human-facing contract number (also the final matching tie-break)
    pub contract_number: String,

    /// Party providing the work (person or organization)
    pub provider_id: String,
    pub provider_kind: PartyKind,

    /// Party receiving and paying for the work
    pub recipient_id: String,
    pub recipient_kind: PartyKind,

    /// Fallback hourly rate when no work-type rate is configured
    pub base_hourly_rate: f64,

    /// Per-work-type rate card
    pub work_type_rates: WorkTypeRates,

    pub status: ContractStatus,

    /// Day this contract came into force; newer contracts win matching ties
    pub effective_date: NaiveDate,
}

impl Contract {
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }
}
