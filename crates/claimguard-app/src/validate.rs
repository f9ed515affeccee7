//! The `validate` use case: run every check and produce a report envelope.

use claimguard_domain::{CheckBindings, ClaimRegistry, ResultSet, run_all};
use claimguard_settings::ResolvedDeployment;
use claimguard_types::{
    ClaimCategory, ClaimResultEntry, SCHEMA_REPORT_V1, ToolMeta, ValidationReport,
    ValidationSummary,
};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Input for the validate use case.
pub struct ValidationInput<'a> {
    pub registry: &'a ClaimRegistry,
    pub bindings: &'a CheckBindings,
    pub deployment: &'a ResolvedDeployment,
}

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub struct ValidationOutput {
    /// The assembled report envelope.
    pub report: ValidationReport,
    /// Raw per-claim results, for rendering.
    pub results: ResultSet,
}

/// Run the full claim set and assemble the report envelope.
pub fn run_validation(input: ValidationInput<'_>) -> ValidationOutput {
    let started_at = OffsetDateTime::now_utc();
    let results = run_all(input.registry, input.bindings);
    let finished_at = OffsetDateTime::now_utc();

    let entries: Vec<ClaimResultEntry> = input
        .registry
        .all_claims()
        .iter()
        .map(|claim| {
            let result = results
                .get(claim.id)
                .expect("run_all yields one result per registered claim");
            ClaimResultEntry {
                claim_id: claim.id.to_string(),
                category: claim.category,
                description: claim.description.to_string(),
                outcome: result.outcome,
                detail: result.detail.clone(),
            }
        })
        .collect();

    let mut by_outcome: BTreeMap<String, u32> = BTreeMap::new();
    for entry in &entries {
        *by_outcome.entry(entry.outcome.label().to_string()).or_insert(0) += 1;
    }

    let summary = ValidationSummary {
        deployment: input.deployment.key.clone(),
        total_claims: entries.len() as u32,
        total_categories: ClaimCategory::ALL.len() as u32,
        by_outcome,
    };

    let report = ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "claimguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        results: entries,
        summary,
    };

    ValidationOutput { report, results }
}
