use crate::RenderableReport;

/// Render the validation checklist: every claim with its expected result, procedure,
/// and current status.
pub fn render_checklist(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Security Claims Validation Checklist\n\n");
    out.push_str(&format!("Deployment: {}\n", report.deployment));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    for category in &report.categories {
        out.push_str(&format!("## {}\n\n", category.name));

        for claim in &category.claims {
            out.push_str(&format!("### {} (`{}`)\n\n", claim.description, claim.id));
            out.push_str(&format!("**Expected Result:** {}\n\n", claim.expected_result));
            out.push_str("**Test Procedure:**\n\n");
            out.push_str(&claim.test_procedure);
            out.push_str("\n\n");
            out.push_str(&format!("**Status:** [{}]\n\n", claim.outcome.label()));
            if let Some(detail) = claim.detail.as_deref().filter(|d| !d.is_empty()) {
                out.push_str(&format!("**Details:** {detail}\n\n"));
            }
            out.push_str("---\n\n");
        }
    }

    out
}
