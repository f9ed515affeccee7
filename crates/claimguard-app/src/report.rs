use anyhow::Context;
use claimguard_domain::{ClaimRegistry, ResultSet};
use claimguard_render::{RenderableCategory, RenderableClaim, RenderableReport};
use claimguard_types::{ClaimCategory, Outcome, ValidationReport};
use time::Date;

/// Convert a completed run into the renderer's model: categories in canonical order
/// (empty ones omitted), claims in registration order within each category.
pub fn to_renderable(
    registry: &ClaimRegistry,
    results: &ResultSet,
    deployment: &str,
    generated_at: &str,
) -> RenderableReport {
    let categories = ClaimCategory::ALL
        .iter()
        .filter_map(|&category| {
            let claims: Vec<RenderableClaim> = registry
                .by_category(category)
                .into_iter()
                .map(|claim| {
                    let result = results.get(claim.id);
                    RenderableClaim {
                        id: claim.id.to_string(),
                        description: claim.description.to_string(),
                        test_procedure: claim.test_procedure.to_string(),
                        expected_result: claim.expected_result.to_string(),
                        outcome: result.map(|r| r.outcome).unwrap_or(Outcome::Pending),
                        detail: result
                            .map(|r| r.detail.clone())
                            .filter(|detail| !detail.is_empty()),
                    }
                })
                .collect();

            (!claims.is_empty()).then(|| RenderableCategory {
                name: category.display_name().to_string(),
                claims,
            })
        })
        .collect();

    RenderableReport {
        generated_at: generated_at.to_string(),
        deployment: deployment.to_string(),
        categories,
    }
}

/// Dated report file name. Same deployment + same date overwrites the earlier report.
pub fn report_file_name(deployment_key: &str, date: Date) -> String {
    format!(
        "{deployment_key}-security-{:04}-{:02}-{:02}.md",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}
