//! Period assembly
//!
//! Builds a [`TimesheetPeriod`] from the shared entry store for one person
//! and window: day groups, totals, estimated cost, and the data-quality
//! flags the approval UI surfaces. The period comes back as a draft; the
//! state machine in [`super::state`] owns everything after that.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use workgraph_domain::{
    constants::MAX_DAILY_HOURS, is_weekend, week_end, week_start, ApprovalConfig, Contract,
    DayGroup, DayStatus, PeriodFlags, PeriodStatus, Result, TimeEntry, TimesheetPeriod, WorkType,
};

use crate::matching::find_contract;
use crate::ports::EntryStore;
use crate::rates::resolve_rate;

/// Assembles draft periods from store entries.
pub struct PeriodBuilder {
    store: Arc<dyn EntryStore>,
    config: ApprovalConfig,
}

impl PeriodBuilder {
    /// Create a builder over the given store with default configuration.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store, config: ApprovalConfig::default() }
    }

    /// Override the approval configuration.
    #[must_use]
    pub fn with_config(mut self, config: ApprovalConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the period for the week containing `day` (Monday through
    /// Sunday).
    pub fn build_week(
        &self,
        person_id: &str,
        day: NaiveDate,
        contracts: &[Contract],
        holidays: &[NaiveDate],
    ) -> Result<TimesheetPeriod> {
        self.build_period(person_id, week_start(day), week_end(day), contracts, holidays)
    }

    /// Build the period starting at `start` with the configured length.
    pub fn build_period_from(
        &self,
        person_id: &str,
        start: NaiveDate,
        contracts: &[Contract],
        holidays: &[NaiveDate],
    ) -> Result<TimesheetPeriod> {
        let end = start + chrono::Duration::days(self.config.period_length_days - 1);
        self.build_period(person_id, start, end, contracts, holidays)
    }

    /// Build a draft period for an explicit inclusive window.
    ///
    /// Totals accumulate by plain addition, unrounded; cost estimation runs
    /// every entry through contract matching and rate resolution. Entries
    /// with no governing contract still count toward hours but not cost, and
    /// raise the `outside_contract` flag.
    pub fn build_period(
        &self,
        person_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        contracts: &[Contract],
        holidays: &[NaiveDate],
    ) -> Result<TimesheetPeriod> {
        let entries = self.store.entries_for_period(person_id, start, end)?;
        debug!(person_id, entries = entries.len(), %start, %end, "assembling period");

        let mut total_hours = 0.0;
        let mut overtime_hours = 0.0;
        let mut estimated_cost = 0.0;
        let mut flags = PeriodFlags::default();
        let mut by_day: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();

        for entry in entries {
            total_hours += entry.hours;
            if entry.work_type == WorkType::Overtime {
                overtime_hours += entry.hours;
            }

            match find_contract(&entry, contracts) {
                Some(contract) => {
                    estimated_cost += entry.hours * resolve_rate(contract, entry.work_type).rate;
                }
                None => flags.outside_contract = true,
            }

            flags.has_weekend |= is_weekend(entry.date);
            flags.has_holiday |= holidays.contains(&entry.date);
            flags.missing_tasks |= entry.task.trim().is_empty();

            by_day.entry(entry.date).or_default().push(entry);
        }

        let day_groups: Vec<DayGroup> = by_day
            .into_iter()
            .map(|(date, entries)| {
                let day_total: f64 = entries.iter().map(|e| e.hours).sum();
                flags.over_daily_limit |= day_total > MAX_DAILY_HOURS;
                DayGroup { date, entries, total_hours: day_total, status: DayStatus::Submitted }
            })
            .collect();

        Ok(TimesheetPeriod {
            person_id: person_id.to_string(),
            period_start: start,
            period_end: end,
            total_hours,
            overtime_hours,
            estimated_cost,
            status: PeriodStatus::Draft,
            submitted_at: None,
            due_at: None,
            flags,
            day_groups,
            audit_trail: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use workgraph_domain::{ContractStatus, EntryPatch, PartyKind, WorkgraphError, WorkTypeRates};

    use super::*;

    /// In-memory mock for `EntryStore`.
    ///
    /// Stores a fixed set of entries and answers the period query the way
    /// the real store does: filtered by person, sorted ascending by date.
    struct MockEntryStore {
        entries: Vec<TimeEntry>,
    }

    impl MockEntryStore {
        fn new(entries: Vec<TimeEntry>) -> Self {
            Self { entries }
        }
    }

    impl EntryStore for MockEntryStore {
        fn add_entry(&self, _entry: TimeEntry) -> Result<()> {
            Ok(())
        }

        fn update_entry(&self, entry_id: &str, _patch: &EntryPatch) -> Result<()> {
            Err(WorkgraphError::NotFound(entry_id.to_string()))
        }

        fn delete_entry(&self, entry_id: &str) -> Result<()> {
            Err(WorkgraphError::NotFound(entry_id.to_string()))
        }

        fn entries_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TimeEntry>> {
            Ok(self
                .entries
                .iter()
                .filter(|e| e.user_id == user_id && e.date == date)
                .cloned()
                .collect())
        }

        fn entries_for_period(
            &self,
            user_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<TimeEntry>> {
            let mut entries: Vec<TimeEntry> = self
                .entries
                .iter()
                .filter(|e| e.user_id == user_id && e.date >= start && e.date <= end)
                .cloned()
                .collect();
            entries.sort_by(|a, b| a.date.cmp(&b.date));
            Ok(entries)
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn sarah_contract() -> Contract {
        Contract {
            id: "c-sarah".to_string(),
            contract_number: "CN-0001".to_string(),
            provider_id: "sarah".to_string(),
            provider_kind: PartyKind::Individual,
            recipient_id: "client".to_string(),
            recipient_kind: PartyKind::Company,
            base_hourly_rate: 100.0,
            work_type_rates: WorkTypeRates {
                regular: Some(100.0),
                overtime: Some(150.0),
                ..WorkTypeRates::default()
            },
            status: ContractStatus::Active,
            effective_date: date(1),
        }
    }

    fn builder_with(entries: Vec<TimeEntry>) -> PeriodBuilder {
        PeriodBuilder::new(Arc::new(MockEntryStore::new(entries)))
    }

    #[test]
    fn test_builds_day_groups_sorted_by_date() {
        let entries = vec![
            TimeEntry::new("sarah", date(8), 4.0, WorkType::Regular, "review"),
            TimeEntry::new("sarah", date(6), 8.0, WorkType::Regular, "build"),
            TimeEntry::new("sarah", date(6), 1.0, WorkType::Regular, "standup"),
        ];
        let builder = builder_with(entries);

        let period =
            builder.build_period("sarah", date(6), date(12), &[sarah_contract()], &[]).unwrap();

        assert_eq!(period.status, PeriodStatus::Draft);
        assert_eq!(period.day_groups.len(), 2);
        assert_eq!(period.day_groups[0].date, date(6));
        assert_eq!(period.day_groups[0].total_hours, 9.0);
        assert_eq!(period.day_groups[1].date, date(8));
        assert_eq!(period.total_hours, 13.0);
    }

    #[test]
    fn test_overtime_and_cost_estimation() {
        let entries = vec![
            TimeEntry::new("sarah", date(6), 8.0, WorkType::Regular, "build"),
            TimeEntry::new("sarah", date(7), 2.0, WorkType::Overtime, "incident"),
        ];
        let builder = builder_with(entries);

        let period =
            builder.build_period("sarah", date(6), date(12), &[sarah_contract()], &[]).unwrap();

        assert_eq!(period.overtime_hours, 2.0);
        assert_eq!(period.estimated_cost, 8.0 * 100.0 + 2.0 * 150.0);
    }

    #[test]
    fn test_flags_weekend_holiday_missing_task() {
        // 2025-01-11 is a Saturday
        let entries = vec![
            TimeEntry::new("sarah", date(11), 3.0, WorkType::Regular, "build"),
            TimeEntry::new("sarah", date(7), 2.0, WorkType::Regular, "   "),
        ];
        let builder = builder_with(entries);

        let period = builder
            .build_period("sarah", date(6), date(12), &[sarah_contract()], &[date(7)])
            .unwrap();

        assert!(period.flags.has_weekend);
        assert!(period.flags.has_holiday);
        assert!(period.flags.missing_tasks);
        assert!(!period.flags.outside_contract);
        assert!(!period.flags.over_daily_limit);
    }

    #[test]
    fn test_outside_contract_flag_and_cost_exclusion() {
        // AC: hours without a governing contract count toward totals but not
        // cost, and raise the flag
        let entries = vec![TimeEntry::new("sarah", date(6), 8.0, WorkType::Regular, "build")];
        let builder = builder_with(entries);

        let period = builder.build_period("sarah", date(6), date(12), &[], &[]).unwrap();

        assert!(period.flags.outside_contract);
        assert_eq!(period.total_hours, 8.0);
        assert_eq!(period.estimated_cost, 0.0);
    }

    #[test]
    fn test_build_week_covers_monday_through_sunday() {
        let entries = vec![
            TimeEntry::new("sarah", date(6), 8.0, WorkType::Regular, "monday"),
            TimeEntry::new("sarah", date(12), 2.0, WorkType::Regular, "sunday"),
            TimeEntry::new("sarah", date(13), 4.0, WorkType::Regular, "next week"),
        ];
        let builder = builder_with(entries);

        // 2025-01-08 is a Wednesday in the week of Jan 6-12
        let period = builder.build_week("sarah", date(8), &[sarah_contract()], &[]).unwrap();

        assert_eq!(period.period_start, date(6));
        assert_eq!(period.period_end, date(12));
        assert_eq!(period.total_hours, 10.0);
    }

    #[test]
    fn test_empty_window_builds_empty_draft() {
        let builder = builder_with(Vec::new());

        let period =
            builder.build_period("sarah", date(6), date(12), &[sarah_contract()], &[]).unwrap();

        assert!(period.day_groups.is_empty());
        assert_eq!(period.total_hours, 0.0);
        assert_eq!(period.flags, PeriodFlags::default());
    }
}
