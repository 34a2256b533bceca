//! End-to-end flow over the in-memory store: log entries, assemble the
//! period, group by contract, and walk the approval chain.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use workgraph_core::approval::{queue, state};
use workgraph_core::{
    validate_entry_deletable, validate_new_entry, EntryStore, GroupingEngine, PeriodBuilder,
};
use workgraph_domain::{
    ApprovalConfig, AuditAction, Contract, ContractStatus, EntryPatch, Party, PartyKind,
    PeriodStatus, TimeEntry, WorkType, WorkTypeRates,
};
use workgraph_store::InMemoryEntryStore;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
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

fn log_entry(store: &InMemoryEntryStore, entry: TimeEntry) {
    let same_day = store.entries_for_date(&entry.user_id, entry.date).unwrap();
    validate_new_entry(&entry, &same_day).unwrap();
    store.add_entry(entry).unwrap();
}

#[test]
fn test_full_timesheet_cycle() {
    init_logging();

    let store = Arc::new(InMemoryEntryStore::new());
    let contracts = vec![sarah_contract()];
    let people = vec![Party::new("sarah", "Sarah Chen", PartyKind::Individual)];

    // Contributor logs a week of work
    log_entry(&store, TimeEntry::new("sarah", date(6), 8.0, WorkType::Regular, "api integration"));
    log_entry(&store, TimeEntry::new("sarah", date(7), 2.0, WorkType::Overtime, "release incident"));

    // Assemble the draft period for that week
    let builder = PeriodBuilder::new(store.clone());
    let mut period = builder.build_week("sarah", date(8), &contracts, &[]).unwrap();
    assert_eq!(period.period_start, date(6));
    assert_eq!(period.period_end, date(12));
    assert_eq!(period.total_hours, 10.0);
    assert_eq!(period.overtime_hours, 2.0);
    assert_eq!(period.estimated_cost, 1100.0);

    // Submit for review
    let submitted_at = Utc.with_ymd_and_hms(2025, 1, 13, 9, 0, 0).unwrap();
    state::submit(&mut period, "sarah", submitted_at, &ApprovalConfig::default()).unwrap();
    assert_eq!(period.status, PeriodStatus::Submitted);
    assert!(period.due_at.is_some());

    // Approver sees the same entries grouped by contract
    let entries = store.entries_for_period("sarah", date(6), date(12)).unwrap();
    let outcome = GroupingEngine::new().group_by_contract(&entries, &contracts, &people);
    assert!(outcome.is_fully_assigned());
    assert_eq!(outcome.groups.len(), 1);
    let group = &outcome.groups[0];
    assert_eq!(group.display_name, "Sarah Chen");
    assert_eq!(group.total_hours, 10.0);
    assert_eq!(group.total_amount, 1100.0);
    assert_eq!(group.people, vec!["sarah".to_string()]);

    // Queue view: one submitted period, bulk-approved
    let now = Utc.with_ymd_and_hms(2025, 1, 14, 9, 0, 0).unwrap();
    let counters = queue::queue_counters(
        std::slice::from_ref(&period),
        now,
        &ApprovalConfig::default(),
    );
    assert_eq!(counters.submitted, 1);

    let mut view = vec![period];
    let bulk = queue::approve_all(&mut view, "lead", now);
    assert_eq!(bulk.approved, vec!["sarah".to_string()]);
    assert!(bulk.failed.is_empty());
    let mut period = view.remove(0);
    assert_eq!(period.status, PeriodStatus::Approved);

    // Contributor fixes an entry after approval: amend, then re-review
    let trail_len = period.audit_trail.len();
    let later = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
    state::amend(&mut period, "sarah", later, Some("tuesday was 3h, not 2h")).unwrap();
    assert_eq!(period.status, PeriodStatus::Amended);
    assert_eq!(period.audit_trail.len(), trail_len + 1);

    state::approve(&mut period, "lead", later, None).unwrap();
    assert_eq!(period.status, PeriodStatus::Approved);

    let actions: Vec<AuditAction> = period.audit_trail.iter().map(|a| a.action).collect();
    assert_eq!(
        actions,
        vec![AuditAction::Submit, AuditAction::Approve, AuditAction::Amend, AuditAction::Approve]
    );
}

#[test]
fn test_draft_edit_and_delete_round_trip() {
    init_logging();

    let store = InMemoryEntryStore::new();
    let entry = TimeEntry::new("sarah", date(6), 4.0, WorkType::Regular, "draft work");
    let entry_id = entry.id.clone();
    log_entry(&store, entry);

    // Contributor reshapes the draft: different day, more hours
    let patch = EntryPatch { date: Some(date(7)), hours: Some(5.5), ..EntryPatch::default() };
    store.update_entry(&entry_id, &patch).unwrap();

    let moved = store.entries_for_date("sarah", date(7)).unwrap();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].hours, 5.5);

    // Drafts can be deleted; the query must come back empty
    validate_entry_deletable(&moved[0]).unwrap();
    store.delete_entry(&entry_id).unwrap();
    assert!(store.entries_for_date("sarah", date(7)).unwrap().is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_rejection_loop_back_through_the_store() {
    init_logging();

    let store = Arc::new(InMemoryEntryStore::new());
    let contracts = vec![sarah_contract()];

    let entry = TimeEntry::new("sarah", date(6), 12.0, WorkType::Regular, "migration");
    let entry_id = entry.id.clone();
    log_entry(&store, entry);

    let builder = PeriodBuilder::new(store.clone());
    let mut period = builder.build_week("sarah", date(6), &contracts, &[]).unwrap();

    let day_one = Utc.with_ymd_and_hms(2025, 1, 13, 9, 0, 0).unwrap();
    state::submit(&mut period, "sarah", day_one, &ApprovalConfig::default()).unwrap();
    state::reject(&mut period, "lead", day_one, "12h on one task needs a breakdown").unwrap();
    assert_eq!(period.status, PeriodStatus::Rejected);

    // Contributor splits the entry and resubmits a fresh assembly
    store.update_entry(&entry_id, &EntryPatch { hours: Some(8.0), ..EntryPatch::default() }).unwrap();
    store.add_entry(TimeEntry::new("sarah", date(6), 4.0, WorkType::Regular, "migration review")).unwrap();

    let mut period = builder.build_week("sarah", date(6), &contracts, &[]).unwrap();
    assert_eq!(period.total_hours, 12.0);
    assert_eq!(period.day_groups.len(), 1);
    assert_eq!(period.day_groups[0].entries.len(), 2);

    let day_two = Utc.with_ymd_and_hms(2025, 1, 14, 9, 0, 0).unwrap();
    state::submit(&mut period, "sarah", day_two, &ApprovalConfig::default()).unwrap();
    state::approve(&mut period, "lead", day_two, None).unwrap();
    assert_eq!(period.status, PeriodStatus::Approved);
}
