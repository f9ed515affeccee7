//! CLI entry point for claimguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `claimguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use claimguard_app::{
    ValidationInput, ValidationOutput, check_bindings, report_file_name, run_validation,
    serialize_report, to_renderable,
};
use claimguard_domain::ClaimRegistry;
use claimguard_domain::catalog::builtin_registry;
use claimguard_probe::ServiceProbe;
use claimguard_render::{RenderableReport, render_checklist, render_summary, render_test_script};
use claimguard_settings::{ResolvedDeployment, parse_deployments_yaml, resolve_deployment};
use claimguard_types::Claim;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;

#[derive(Parser, Debug)]
#[command(
    name = "claimguard",
    version,
    about = "Security claim validation for hosted service deployments"
)]
struct Cli {
    /// Path to the deployments config YAML.
    #[arg(long, default_value = "deployments.yaml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run all claim checks and write the dated compliance report.
    Validate {
        /// Deployment to validate (key from the deployments config).
        #[arg(long)]
        deployment: String,

        /// Directory for dated compliance reports.
        #[arg(long, default_value = "reports")]
        reports_dir: Utf8PathBuf,

        /// Also write the validation checklist here.
        #[arg(long)]
        checklist_out: Option<Utf8PathBuf>,

        /// Also write the verification script template here.
        #[arg(long)]
        script_out: Option<Utf8PathBuf>,

        /// Also write the full JSON report envelope here.
        #[arg(long)]
        report_json: Option<Utf8PathBuf>,
    },

    /// Run all claim checks and print the validation checklist.
    Checklist {
        /// Deployment to validate (key from the deployments config).
        #[arg(long)]
        deployment: String,

        /// Where to write the checklist (prints to stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print the ad-hoc verification script template.
    Script {
        /// Deployment whose base URL to embed; placeholder URL when omitted.
        #[arg(long)]
        deployment: Option<String>,

        /// Where to write the script (prints to stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Show a claim's description, expected result, and test procedure.
    Explain {
        /// The claim id (e.g. "log.content").
        claim_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate {
            ref deployment,
            ref reports_dir,
            ref checklist_out,
            ref script_out,
            ref report_json,
        } => cmd_validate(
            &cli.config,
            deployment,
            reports_dir,
            checklist_out.as_deref(),
            script_out.as_deref(),
            report_json.as_deref(),
        ),
        Commands::Checklist {
            ref deployment,
            ref output,
        } => cmd_checklist(&cli.config, deployment, output.as_deref()),
        Commands::Script {
            ref deployment,
            ref output,
        } => cmd_script(&cli.config, deployment.as_deref(), output.as_deref()),
        Commands::Explain { ref claim_id } => cmd_explain(claim_id),
    }
}

fn cmd_validate(
    config: &Utf8Path,
    deployment_key: &str,
    reports_dir: &Utf8Path,
    checklist_out: Option<&Utf8Path>,
    script_out: Option<&Utf8Path>,
    report_json: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let resolved = load_deployment(config, deployment_key)?;
    eprintln!(
        "claimguard: validating {} ({})",
        resolved.display_name, resolved.base_url
    );

    let registry = builtin_registry();
    let (output, renderable) = run_checks(&registry, &resolved)?;

    let report_path = reports_dir.join(report_file_name(
        &resolved.key,
        output.report.finished_at.date(),
    ));
    write_text_file(&report_path, &render_summary(&renderable)).context("write compliance report")?;

    if let Some(path) = checklist_out {
        write_text_file(path, &render_checklist(&renderable)).context("write checklist")?;
    }
    if let Some(path) = script_out {
        write_text_file(path, &render_test_script(&resolved.base_url)).context("write script")?;
    }
    if let Some(path) = report_json {
        write_text_file(path, &serialize_report(&output.report)?).context("write report json")?;
    }

    let summary = serde_json::json!({
        "status": "success",
        "deployment": resolved.key,
        "report_path": report_path.as_str(),
        "total_claims": output.report.summary.total_claims,
        "total_categories": output.report.summary.total_categories,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serialize summary")?
    );

    Ok(())
}

fn cmd_checklist(
    config: &Utf8Path,
    deployment_key: &str,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let resolved = load_deployment(config, deployment_key)?;
    let registry = builtin_registry();
    let (_, renderable) = run_checks(&registry, &resolved)?;
    let checklist = render_checklist(&renderable);

    match output {
        Some(path) => write_text_file(path, &checklist).context("write checklist")?,
        None => print!("{checklist}"),
    }
    Ok(())
}

fn cmd_script(
    config: &Utf8Path,
    deployment_key: Option<&str>,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let base_url = match deployment_key {
        Some(key) => {
            let cfg = load_config(config)?;
            let Some(deployment) = cfg.deployments.get(key) else {
                let available = cfg
                    .deployments
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!("unknown deployment '{key}' (available: {available})");
            };
            deployment.url.clone()
        }
        None => "https://your-api.example.com".to_string(),
    };

    let script = render_test_script(&base_url);
    match output {
        Some(path) => write_text_file(path, &script).context("write script")?,
        None => print!("{script}"),
    }
    Ok(())
}

fn cmd_explain(claim_id: &str) -> anyhow::Result<()> {
    let registry = builtin_registry();
    match registry.get(claim_id) {
        Some(claim) => {
            print!("{}", format_claim(claim));
            Ok(())
        }
        None => {
            eprintln!("unknown claim id: {claim_id}");
            eprintln!("known claim ids:");
            for claim in registry.all_claims() {
                eprintln!("  {}", claim.id);
            }
            std::process::exit(1);
        }
    }
}

fn format_claim(claim: &Claim) -> String {
    format!(
        "{} ({})\nCategory: {}\n\nExpected result:\n{}\n\nTest procedure:\n{}\n",
        claim.description,
        claim.id,
        claim.category.display_name(),
        claim.expected_result,
        claim.test_procedure
    )
}

/// Run the full claim set against one deployment and prepare the renderable view.
fn run_checks(
    registry: &ClaimRegistry,
    resolved: &ResolvedDeployment,
) -> anyhow::Result<(ValidationOutput, RenderableReport)> {
    let probe = ServiceProbe::new(&resolved.base_url, &resolved.api_key)?;
    let bindings = check_bindings(Arc::new(probe));

    let output = run_validation(ValidationInput {
        registry,
        bindings: &bindings,
        deployment: resolved,
    });

    let generated_at = output
        .report
        .finished_at
        .format(&Rfc3339)
        .context("format report timestamp")?;
    let renderable = to_renderable(
        registry,
        &output.results,
        &resolved.display_name,
        &generated_at,
    );

    Ok((output, renderable))
}

fn load_deployment(config: &Utf8Path, key: &str) -> anyhow::Result<ResolvedDeployment> {
    let cfg = load_config(config)?;
    resolve_deployment(&cfg, key, |name| std::env::var(name).ok())
}

fn load_config(config: &Utf8Path) -> anyhow::Result<claimguard_settings::DeploymentsConfigV1> {
    let text = std::fs::read_to_string(config)
        .with_context(|| format!("read deployments config: {config}"))?;
    parse_deployments_yaml(&text).with_context(|| format!("parse deployments config: {config}"))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
