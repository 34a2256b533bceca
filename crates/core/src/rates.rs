//! Rate resolution
//!
//! Maps a (contract, work type) pair to the hourly rate used for pricing.
//! Resolution never fails: a missing work-type rate falls back to the
//! contract's base hourly rate, flagged as `assumed` so callers can surface
//! "rate assumed" rows instead of pricing silently.

use workgraph_domain::{Contract, ResolvedRate, WorkType};

/// Resolve the hourly rate a contract applies to the given work type.
pub fn resolve_rate(contract: &Contract, work_type: WorkType) -> ResolvedRate {
    match contract.work_type_rates.rate_for(work_type) {
        Some(rate) => ResolvedRate { rate, assumed: false },
        None => ResolvedRate { rate: contract.base_hourly_rate, assumed: true },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use workgraph_domain::{ContractStatus, PartyKind, WorkTypeRates};

    use super::*;

    fn test_contract(base: f64, rates: WorkTypeRates) -> Contract {
        Contract {
            id: "c-1".to_string(),
            contract_number: "CN-0001".to_string(),
            provider_id: "sarah".to_string(),
            provider_kind: PartyKind::Individual,
            recipient_id: "acme".to_string(),
            recipient_kind: PartyKind::Company,
            base_hourly_rate: base,
            work_type_rates: rates,
            status: ContractStatus::Active,
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_configured_rate_wins() {
        // AC: a configured work-type rate is used as-is, not assumed
        let contract =
            test_contract(100.0, WorkTypeRates { overtime: Some(150.0), ..WorkTypeRates::default() });

        let resolved = resolve_rate(&contract, WorkType::Overtime);

        assert_eq!(resolved.rate, 150.0);
        assert!(!resolved.assumed);
    }

    #[test]
    fn test_missing_work_type_falls_back_to_base() {
        // AC: workTypeRates = {regular: 60} + overtime entry resolves to the
        // base rate, never undefined or zero
        let contract =
            test_contract(80.0, WorkTypeRates { regular: Some(60.0), ..WorkTypeRates::default() });

        let resolved = resolve_rate(&contract, WorkType::Overtime);

        assert_eq!(resolved.rate, 80.0);
        assert!(resolved.assumed, "fallback must be flagged as assumed");
    }

    #[test]
    fn test_empty_rate_card_always_assumes_base() {
        let contract = test_contract(55.0, WorkTypeRates::default());

        for work_type in
            [WorkType::Regular, WorkType::Travel, WorkType::Overtime, WorkType::Oncall]
        {
            let resolved = resolve_rate(&contract, work_type);
            assert_eq!(resolved.rate, 55.0);
            assert!(resolved.assumed);
        }
    }
}
