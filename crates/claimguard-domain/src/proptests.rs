//! Property tests for the aggregation invariants.

use crate::engine::{CheckBindings, run_all};
use crate::executor::CheckError;
use crate::logscan::validate_log_content;
use crate::test_support::{claim, registry_of};
use claimguard_types::{CheckResult, ClaimCategory, LogRecord, Outcome};
use proptest::prelude::*;

/// Fixed pool of claim ids so the registry can borrow `'static` strings.
const ID_POOL: [&str; 8] = [
    "auth.p0", "auth.p1", "enc.p2", "data.p3", "infra.p4", "compliance.p5", "log.p6", "api.p7",
];

#[derive(Clone, Copy, Debug)]
enum Behavior {
    Pass,
    Fail,
    Manual,
    NotImplemented,
    Crashed,
    Unbound,
}

fn behavior_strategy() -> impl Strategy<Value = Behavior> {
    prop_oneof![
        Just(Behavior::Pass),
        Just(Behavior::Fail),
        Just(Behavior::Manual),
        Just(Behavior::NotImplemented),
        Just(Behavior::Crashed),
        Just(Behavior::Unbound),
    ]
}

fn bind(bindings: &mut CheckBindings, id: &'static str, behavior: Behavior) {
    match behavior {
        Behavior::Pass => bindings.bind(id, || Ok(CheckResult::new(Outcome::Pass, "ok"))),
        Behavior::Fail => bindings.bind(id, || Ok(CheckResult::new(Outcome::Fail, "bad"))),
        Behavior::Manual => bindings.bind(id, || Ok(CheckResult::new(Outcome::Manual, "review"))),
        Behavior::NotImplemented => bindings.bind(id, move || {
            Err(CheckError::NotImplemented(format!("{id} not yet implemented")))
        }),
        Behavior::Crashed => bindings.bind(id, move || {
            Err(CheckError::Crashed(format!("{id} blew up")))
        }),
        Behavior::Unbound => {}
    }
}

proptest! {
    /// Coverage: whatever the checks do, every registered claim gets exactly one
    /// result, and nothing outside the registry appears.
    #[test]
    fn run_all_always_covers_the_registry(
        behaviors in proptest::collection::vec(behavior_strategy(), 1..=ID_POOL.len())
    ) {
        let claims: Vec<_> = ID_POOL
            .iter()
            .take(behaviors.len())
            .map(|&id| claim(id, ClaimCategory::Authentication))
            .collect();
        let registry = registry_of(claims);

        let mut bindings = CheckBindings::new();
        for (&id, &behavior) in ID_POOL.iter().zip(behaviors.iter()) {
            bind(&mut bindings, id, behavior);
        }

        let results = run_all(&registry, &bindings);

        prop_assert_eq!(results.len(), registry.len());
        for (claim, behavior) in registry.all_claims().iter().zip(behaviors.iter()) {
            let result = results.get(claim.id).expect("claim covered");
            match behavior {
                Behavior::Pass => prop_assert_eq!(result.outcome, Outcome::Pass),
                Behavior::Fail => prop_assert_eq!(result.outcome, Outcome::Fail),
                Behavior::Manual => prop_assert_eq!(result.outcome, Outcome::Manual),
                Behavior::NotImplemented => {
                    prop_assert_eq!(result.outcome, Outcome::Pending);
                    prop_assert!(!result.detail.is_empty());
                }
                Behavior::Crashed => {
                    prop_assert_eq!(result.outcome, Outcome::Pending);
                    prop_assert!(result.detail.contains("check crashed"));
                }
                Behavior::Unbound => prop_assert_eq!(result.outcome, Outcome::Pending),
            }
        }
    }

    /// The 80% metadata threshold is exact: presence at or above 4/5 of records passes,
    /// below it warns naming the field.
    #[test]
    fn metadata_threshold_is_exact(total in 1usize..=40, with_request_id_seed in 0usize..=40) {
        let with_request_id = with_request_id_seed.min(total);

        let full: LogRecord = serde_json::from_value(serde_json::json!({
            "timestamp": "2025-11-05T07:19:06Z",
            "level": "info",
            "message": "Request completed",
            "context": { "requestId": "req_a", "endpoint": "/health", "method": "GET" },
            "data": { "statusCode": 200, "durationMs": 11 }
        })).expect("record");
        let without: LogRecord = serde_json::from_value(serde_json::json!({
            "timestamp": "2025-11-05T07:19:06Z",
            "level": "info",
            "message": "Request completed",
            "context": { "endpoint": "/health", "method": "GET" },
            "data": { "statusCode": 200, "durationMs": 11 }
        })).expect("record");

        let mut records = vec![full; with_request_id];
        records.extend(std::iter::repeat_n(without, total - with_request_id));

        let result = validate_log_content(&records);
        if with_request_id * 5 >= total * 4 {
            prop_assert_eq!(result.outcome, Outcome::Pass);
        } else {
            prop_assert_eq!(result.outcome, Outcome::Warn);
            prop_assert!(result.detail.contains("requestId"));
        }
    }
}
