use crate::model::DeploymentsConfigV1;
use anyhow::Context;

/// A deployment with its credential resolved. The claim layer consumes only this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDeployment {
    pub key: String,
    pub display_name: String,
    pub base_url: String,
    pub api_key: String,
}

/// Resolve one deployment by key. `env` is the environment accessor (injected so
/// resolution stays testable); misconfiguration errors carry the operator-facing
/// diagnostic.
pub fn resolve_deployment(
    cfg: &DeploymentsConfigV1,
    key: &str,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ResolvedDeployment> {
    let Some(deployment) = cfg.deployments.get(key) else {
        let available = cfg
            .deployments
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("unknown deployment '{key}' (available: {available})");
    };

    if deployment.url.trim().is_empty() {
        anyhow::bail!("deployment '{key}' has no url configured");
    }

    let env_var = deployment
        .api_key_env
        .as_deref()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("no api_key_env defined for deployment '{key}'"))?;

    let api_key = env(env_var).filter(|v| !v.is_empty()).with_context(|| {
        format!("environment variable '{env_var}' is not set; set it with: export {env_var}='your-api-key'")
    })?;

    Ok(ResolvedDeployment {
        key: key.to_string(),
        display_name: deployment
            .name
            .clone()
            .unwrap_or_else(|| key.to_string()),
        base_url: deployment.url.clone(),
        api_key,
    })
}
