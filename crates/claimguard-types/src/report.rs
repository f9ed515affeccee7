use crate::claim::{ClaimCategory, Outcome};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for claimguard reports.
pub const SCHEMA_REPORT_V1: &str = "claimguard.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-claim result as emitted in the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimResultEntry {
    pub claim_id: String,
    pub category: ClaimCategory,
    pub description: String,
    pub outcome: Outcome,
    pub detail: String,
}

/// Aggregate counts for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ValidationSummary {
    pub deployment: String,
    pub total_claims: u32,
    pub total_categories: u32,

    /// Counts keyed by outcome display label; BTreeMap keeps label-sorted order.
    pub by_outcome: BTreeMap<String, u32>,
}

/// The emitted report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// One entry per registered claim, in registration order.
    pub results: Vec<ClaimResultEntry>,
    pub summary: ValidationSummary,
}
