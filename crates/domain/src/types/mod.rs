//! Domain types and models

pub mod approval;
pub mod contract;
pub mod entry;
pub mod grouping;
pub mod party;

pub use approval::{
    ActorRole, AuditAction, AuditEntry, DayGroup, DayStatus, PeriodFlags, PeriodStatus,
    TimesheetPeriod,
};
pub use contract::{Contract, ContractStatus, WorkTypeRates};
pub use entry::{Attribution, EntryPatch, EntryStatus, TimeEntry, WorkType};
pub use grouping::{ContractGroup, GroupingOutcome, ResolvedRate, UnassignableEntry, WeekRange};
pub use party::{Party, PartyKind};
