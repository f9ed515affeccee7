use claimguard_types::Outcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableClaim {
    pub id: String,
    pub description: String,
    pub test_procedure: String,
    pub expected_result: String,
    pub outcome: Outcome,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCategory {
    pub name: String,
    pub claims: Vec<RenderableClaim>,
}

/// Everything the renderers need, already ordered: categories in canonical order
/// (empty ones omitted), claims in registration order within each category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    /// Preformatted RFC 3339 stamp.
    pub generated_at: String,
    /// Deployment display name.
    pub deployment: String,
    pub categories: Vec<RenderableCategory>,
}

impl RenderableReport {
    pub fn total_claims(&self) -> usize {
        self.categories.iter().map(|c| c.claims.len()).sum()
    }
}
