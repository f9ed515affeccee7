//! Target-service adapter.
//!
//! One narrow operation: fetch recent structured log records from the deployment's log
//! endpoint, authenticated with the deployment's bearer credential. The core never
//! implements HTTP itself.

#![forbid(unsafe_code)]

use anyhow::Context;
use claimguard_types::LogRecord;
use std::time::Duration;

/// Where the log validator gets its records.
pub trait LogSource {
    /// Fetch up to `limit` recent records, newest first as served by the endpoint.
    fn fetch_recent(&self, limit: usize) -> anyhow::Result<Vec<LogRecord>>;
}

/// Request timeout. Bounds every remote check so one hanging endpoint cannot stall
/// the rest of the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("claimguard/", env!("CARGO_PKG_VERSION"));

/// Bearer-authenticated HTTP probe bound to one deployment.
pub struct ServiceProbe {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ServiceProbe {
    pub fn new(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("credential is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl LogSource for ServiceProbe {
    fn fetch_recent(&self, limit: usize) -> anyhow::Result<Vec<LogRecord>> {
        let url = format!("{}/logs/recent?limit={limit}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("fetch logs: {url}"))?
            .error_for_status()
            .context("log endpoint returned an error status")?;

        let body: serde_json::Value = response.json().context("parse log response body")?;
        Ok(parse_log_entries(body))
    }
}

/// Extract records from a log response body. The endpoint serves either a bare array
/// or `{"logs": [...]}`. Entries that are not JSON objects are skipped: the validator's
/// contract is defined over structured records only, so a batch that is entirely
/// malformed reaches it as zero records.
pub fn parse_log_entries(body: serde_json::Value) -> Vec<LogRecord> {
    let entries = match body {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(mut map) => match map.remove("logs") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}
