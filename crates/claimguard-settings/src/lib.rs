//! Deployment configuration parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses `deployments.yaml` content provided
//! as a string and resolves credentials through an injected environment accessor.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DeploymentConfig, DeploymentsConfigV1};
pub use resolve::{ResolvedDeployment, resolve_deployment};

/// Parse `deployments.yaml` (or equivalent) into a typed model.
pub fn parse_deployments_yaml(input: &str) -> anyhow::Result<DeploymentsConfigV1> {
    let cfg: DeploymentsConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}
