use crate::executor::{self, CheckError};
use crate::registry::ClaimRegistry;
use claimguard_types::{CheckResult, Outcome};
use std::collections::BTreeMap;

/// One executable check. Manual-only claims bind a check that unconditionally returns
/// `(MANUAL, instructions)`.
pub type CheckFn = Box<dyn Fn() -> Result<CheckResult, CheckError>>;

/// Claim id -> executable check.
#[derive(Default)]
pub struct CheckBindings {
    checks: BTreeMap<&'static str, CheckFn>,
}

impl CheckBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a check to a claim id. A later bind for the same id replaces the earlier
    /// one; the aggregator only ever sees one check per claim.
    pub fn bind(
        &mut self,
        id: &'static str,
        check: impl Fn() -> Result<CheckResult, CheckError> + 'static,
    ) {
        self.checks.insert(id, Box::new(check));
    }

    pub fn get(&self, id: &str) -> Option<&CheckFn> {
        self.checks.get(id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// The complete per-run mapping of claim id to result.
pub type ResultSet = BTreeMap<&'static str, CheckResult>;

/// Run every registered claim's check and collect exactly one result per claim.
///
/// Failures inside one claim's check are contained to that claim's result: a crash is
/// recorded as PENDING with the message preserved and the run continues. Checks run
/// sequentially in registration order; they are independent and no claim's check may
/// depend on another claim's result.
pub fn run_all(registry: &ClaimRegistry, bindings: &CheckBindings) -> ResultSet {
    let mut results = ResultSet::new();

    for claim in registry.all_claims() {
        let result = match bindings.get(claim.id) {
            Some(check) => match executor::execute(check) {
                Ok(result) => result,
                Err(crash) => CheckResult::new(Outcome::Pending, format!("check crashed: {crash}")),
            },
            None => CheckResult::new(
                Outcome::Pending,
                "no check bound for this claim".to_string(),
            ),
        };
        results.insert(claim.id, result);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{claim, registry_of};
    use claimguard_types::ClaimCategory;

    fn sample_registry() -> ClaimRegistry {
        registry_of(vec![
            claim("auth.one", ClaimCategory::Authentication),
            claim("enc.one", ClaimCategory::Encryption),
            claim("compliance.one", ClaimCategory::Compliance),
        ])
    }

    #[test]
    fn every_claim_gets_exactly_one_result() {
        let registry = sample_registry();
        let mut bindings = CheckBindings::new();
        bindings.bind("auth.one", || Ok(CheckResult::new(Outcome::Pass, "ok")));
        bindings.bind("enc.one", || {
            Err(CheckError::NotImplemented("later".to_string()))
        });
        // compliance.one deliberately unbound

        let results = run_all(&registry, &bindings);

        assert_eq!(results.len(), registry.len());
        for claim in registry.all_claims() {
            assert!(results.contains_key(claim.id), "missing {}", claim.id);
        }
    }

    #[test]
    fn crash_is_contained_to_its_claim() {
        let registry = sample_registry();
        let mut bindings = CheckBindings::new();
        bindings.bind("auth.one", || {
            Err(CheckError::Crashed("socket closed".to_string()))
        });
        bindings.bind("enc.one", || Ok(CheckResult::new(Outcome::Pass, "ok")));
        bindings.bind("compliance.one", || {
            Ok(CheckResult::new(Outcome::Manual, "review the report"))
        });

        let results = run_all(&registry, &bindings);

        let crashed = &results["auth.one"];
        assert_eq!(crashed.outcome, Outcome::Pending);
        assert!(crashed.detail.contains("check crashed"));
        assert!(crashed.detail.contains("socket closed"));

        assert_eq!(results["enc.one"].outcome, Outcome::Pass);
        assert_eq!(results["compliance.one"].outcome, Outcome::Manual);
    }

    #[test]
    fn unbound_claim_is_reported_pending() {
        let registry = sample_registry();
        let results = run_all(&registry, &CheckBindings::new());

        for claim in registry.all_claims() {
            let result = &results[claim.id];
            assert_eq!(result.outcome, Outcome::Pending);
            assert!(!result.detail.is_empty());
        }
    }

    #[test]
    fn identical_inputs_give_identical_result_sets() {
        let registry = sample_registry();
        let mut bindings = CheckBindings::new();
        bindings.bind("auth.one", || {
            Err(CheckError::NotImplemented("auth pending".to_string()))
        });
        bindings.bind("enc.one", || {
            Err(CheckError::NotImplemented("enc pending".to_string()))
        });
        bindings.bind("compliance.one", || {
            Ok(CheckResult::new(Outcome::Manual, "review"))
        });

        let first = run_all(&registry, &bindings);
        let second = run_all(&registry, &bindings);
        assert_eq!(first, second);
    }

    #[test]
    fn rebinding_replaces_the_earlier_check() {
        let mut bindings = CheckBindings::new();
        bindings.bind("auth.one", || Ok(CheckResult::new(Outcome::Fail, "old")));
        bindings.bind("auth.one", || Ok(CheckResult::new(Outcome::Pass, "new")));

        let registry = registry_of(vec![claim("auth.one", ClaimCategory::Authentication)]);
        let results = run_all(&registry, &bindings);
        assert_eq!(results["auth.one"].outcome, Outcome::Pass);
    }
}
