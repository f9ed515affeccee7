use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Verdict for a single claim after one run.
///
/// Terminal: once produced for an invocation it is never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Warn,
    Pending,
    Manual,
}

impl Outcome {
    /// Stable display label used in checklists and summary counts.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Warn => "WARNING",
            Outcome::Pending => "PENDING",
            Outcome::Manual => "MANUAL",
        }
    }
}

/// Outcome plus the free-text detail explaining it (or describing the manual steps).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub outcome: Outcome,
    pub detail: String,
}

impl CheckResult {
    pub fn new(outcome: Outcome, detail: impl Into<String>) -> Self {
        Self {
            outcome,
            detail: detail.into(),
        }
    }
}

/// Claim categories in canonical report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    Authentication,
    Encryption,
    DataHandling,
    Infrastructure,
    Compliance,
    Logging,
    ApiSecurity,
}

impl ClaimCategory {
    /// Canonical ordering used by every renderer.
    pub const ALL: [ClaimCategory; 7] = [
        ClaimCategory::Authentication,
        ClaimCategory::Encryption,
        ClaimCategory::DataHandling,
        ClaimCategory::Infrastructure,
        ClaimCategory::Compliance,
        ClaimCategory::Logging,
        ClaimCategory::ApiSecurity,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ClaimCategory::Authentication => "Authentication & Authorization",
            ClaimCategory::Encryption => "Encryption",
            ClaimCategory::DataHandling => "Data Handling",
            ClaimCategory::Infrastructure => "Infrastructure",
            ClaimCategory::Compliance => "Compliance",
            ClaimCategory::Logging => "Logging & Monitoring",
            ClaimCategory::ApiSecurity => "API Security",
        }
    }
}

/// Static descriptor of one security/privacy claim.
///
/// Claims carry no runtime state: per-run status lives in the result set, so repeated
/// runs never leak state between each other.
#[derive(Clone, Copy, Debug)]
pub struct Claim {
    /// Stable dotted identifier, unique within the registry.
    pub id: &'static str,
    pub category: ClaimCategory,
    /// Human claim text.
    pub description: &'static str,
    /// Numbered verification steps. Documentation, not executable.
    pub test_procedure: &'static str,
    /// Human-readable pass criterion.
    pub expected_result: &'static str,
}
