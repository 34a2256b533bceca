//! Entry-to-contract matching
//!
//! Maps a raw time entry to the contract that governs it. Matching is
//! deterministic: when more than one contract could apply, a named
//! precedence policy picks the winner instead of relying on input order.

use tracing::warn;
use workgraph_domain::{Attribution, Contract, ContractStatus, TimeEntry};

/// Find the contract governing an entry.
///
/// Candidate selection:
/// 1. Contracts whose provider is the entry's owner.
/// 2. If none, and the entry carries organization attribution, contracts
///    whose provider is that organization.
///
/// Precedence among candidates (total order):
/// `Active` status first, then latest `effective_date`, then ascending
/// `contract_number`. Returns `None` when no contract matches; callers must
/// treat that entry as unassignable, never aggregate it at a zero rate.
pub fn find_contract<'a>(entry: &TimeEntry, contracts: &'a [Contract]) -> Option<&'a Contract> {
    let direct: Vec<&Contract> =
        contracts.iter().filter(|c| c.provider_id == entry.user_id).collect();

    let candidates = if direct.is_empty() {
        match &entry.attribution {
            Attribution::Organization { organization_id } => {
                contracts.iter().filter(|c| &c.provider_id == organization_id).collect()
            }
            Attribution::Individual => Vec::new(),
        }
    } else {
        direct
    };

    select_governing(entry, candidates)
}

/// Apply the precedence policy to a candidate set.
fn select_governing<'a>(entry: &TimeEntry, mut candidates: Vec<&'a Contract>) -> Option<&'a Contract> {
    if candidates.len() > 1 {
        // Data-quality signal: the platform intends exactly one governing
        // contract per (person, day)
        warn!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            candidates = candidates.len(),
            "multiple candidate contracts for entry; applying precedence policy"
        );
    }

    candidates.sort_by(|a, b| {
        status_rank(a.status)
            .cmp(&status_rank(b.status))
            .then_with(|| b.effective_date.cmp(&a.effective_date))
            .then_with(|| a.contract_number.cmp(&b.contract_number))
    });

    candidates.into_iter().next()
}

fn status_rank(status: ContractStatus) -> u8 {
    match status {
        ContractStatus::Active => 0,
        ContractStatus::Draft | ContractStatus::Expired | ContractStatus::Terminated => 1,
    }
}
