use crate::RenderableReport;
use std::collections::BTreeMap;

/// Render the compliance report: aggregate counts first, then the claim list per
/// category with status markers.
pub fn render_summary(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Security Compliance Report\n\n");
    out.push_str(&format!("Deployment: {}\n", report.deployment));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    // BTreeMap keys keep the outcome labels in display order.
    let mut by_outcome: BTreeMap<&'static str, u32> = BTreeMap::new();
    for category in &report.categories {
        for claim in &category.claims {
            *by_outcome.entry(claim.outcome.label()).or_insert(0) += 1;
        }
    }

    out.push_str("## Summary\n\n");
    out.push_str(&format!("Total Claims: {}\n", report.total_claims()));
    for (label, count) in &by_outcome {
        out.push_str(&format!("{label}: {count}\n"));
    }
    out.push('\n');

    out.push_str("## Claims by Category\n\n");
    for category in &report.categories {
        out.push_str(&format!(
            "### {} ({} claims)\n\n",
            category.name,
            category.claims.len()
        ));
        for claim in &category.claims {
            out.push_str(&format!(
                "- [{}] {}\n",
                claim.outcome.label(),
                claim.description
            ));
        }
        out.push('\n');
    }

    out
}
