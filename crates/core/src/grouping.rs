//! Contract grouping engine
//!
//! Partitions a flat collection of time entries into per-contract groups
//! with aggregated totals: the unit of approval. Groups are recomputed from
//! scratch on every call; inputs change, the grouping is rerun. Entries
//! without a governing contract are excluded from totals and reported back
//! with their identifiers, never dropped silently.
//!
//! # Algorithm
//! 1. Match every entry to its contract (precedence policy in `matching`)
//! 2. Accumulate per contract: hours, amount (via rate resolution), min/max
//!    date, distinct people
//! 3. Finalize display name and rate label from the party directory
//! 4. Sort: individual contracts before company before agency, then
//!    ascending by display name
//!
//! Accumulation is plain `f64` addition with no intermediate rounding;
//! rounding belongs to display boundaries only.

use ahash::AHashMap;
use chrono::NaiveDate;
use tracing::warn;
use workgraph_domain::{
    format_rate, Contract, ContractGroup, GroupingOutcome, Party, TimeEntry, UnassignableEntry,
    WeekRange,
};

use crate::matching::find_contract;
use crate::rates::resolve_rate;

/// Groups time entries by governing contract.
#[derive(Debug, Default)]
pub struct GroupingEngine;

/// Per-contract running totals while entries are being folded in.
struct GroupAccumulator<'a> {
    contract: &'a Contract,
    entries: Vec<TimeEntry>,
    people: Vec<String>,
    total_hours: f64,
    total_amount: f64,
    first_date: NaiveDate,
    last_date: NaiveDate,
    rate_assumed: bool,
}

impl<'a> GroupAccumulator<'a> {
    fn new(contract: &'a Contract, date: NaiveDate) -> Self {
        Self {
            contract,
            entries: Vec::new(),
            people: Vec::new(),
            total_hours: 0.0,
            total_amount: 0.0,
            first_date: date,
            last_date: date,
            rate_assumed: false,
        }
    }
}

impl GroupingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Partition `entries` into per-contract groups with aggregated totals.
    ///
    /// `people` is the party directory used for display names; a provider
    /// missing from it falls back to its raw id. The returned outcome carries
    /// both the groups and the entries no contract governs; callers decide
    /// how to surface the latter, the totals never absorb them.
    pub fn group_by_contract(
        &self,
        entries: &[TimeEntry],
        contracts: &[Contract],
        people: &[Party],
    ) -> GroupingOutcome {
        let directory: AHashMap<&str, &Party> =
            people.iter().map(|p| (p.id.as_str(), p)).collect();

        let mut accumulators: AHashMap<&str, GroupAccumulator<'_>> = AHashMap::new();
        let mut unassignable = Vec::new();

        for entry in entries {
            let Some(contract) = find_contract(entry, contracts) else {
                unassignable.push(UnassignableEntry {
                    entry_id: entry.id.clone(),
                    user_id: entry.user_id.clone(),
                    date: entry.date,
                });
                continue;
            };

            let resolved = resolve_rate(contract, entry.work_type);
            let acc = accumulators
                .entry(contract.id.as_str())
                .or_insert_with(|| GroupAccumulator::new(contract, entry.date));

            acc.total_hours += entry.hours;
            acc.total_amount += entry.hours * resolved.rate;
            acc.rate_assumed |= resolved.assumed;

            // Min/max must hold regardless of input order
            if entry.date < acc.first_date {
                acc.first_date = entry.date;
            }
            if entry.date > acc.last_date {
                acc.last_date = entry.date;
            }

            if !acc.people.contains(&entry.user_id) {
                acc.people.push(entry.user_id.clone());
            }
            acc.entries.push(entry.clone());
        }

        if !unassignable.is_empty() {
            warn!(
                excluded = unassignable.len(),
                "entries without a governing contract excluded from grouping"
            );
        }

        let mut groups: Vec<ContractGroup> =
            accumulators.into_values().map(|acc| finalize_group(acc, &directory)).collect();

        // User-facing display order: individual < company < agency, then name
        groups.sort_by(|a, b| {
            a.contract_kind.cmp(&b.contract_kind).then_with(|| a.display_name.cmp(&b.display_name))
        });

        GroupingOutcome { groups, unassignable }
    }
}

/// Turn a finished accumulator into a display-ready group.
fn finalize_group(acc: GroupAccumulator<'_>, directory: &AHashMap<&str, &Party>) -> ContractGroup {
    let contract = acc.contract;
    let provider_name = match directory.get(contract.provider_id.as_str()) {
        Some(party) => party.name.clone(),
        None => {
            warn!(provider_id = %contract.provider_id, "contract provider missing from party directory");
            contract.provider_id.clone()
        }
    };

    let display_name = if contract.provider_kind.is_organization() {
        let count = acc.people.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{provider_name} ({count} contractor{plural})")
    } else {
        provider_name
    };

    let mut rate_label = format!("${}/hr", format_rate(contract.base_hourly_rate));
    if contract.provider_kind.is_organization() {
        rate_label.push_str(" blended");
    }

    ContractGroup {
        contract: contract.clone(),
        contract_kind: contract.provider_kind,
        entries: acc.entries,
        people: acc.people,
        total_hours: acc.total_hours,
        total_amount: acc.total_amount,
        week_range: WeekRange { start: acc.first_date, end: acc.last_date },
        display_name,
        rate_label,
        rate_assumed: acc.rate_assumed,
    }
}
