//! Log-content validation.
//!
//! Three steps over a sampled batch of records, in severity order, first non-PASS wins:
//! structural validation, sensitive-data scan, metadata completeness. A malformed log is
//! reported before deeper content analysis; a confirmed leak must not be masked by a
//! later metadata PASS.

use claimguard_types::{CheckResult, LogRecord, Outcome};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Default number of recent records sampled from the log source.
pub const DEFAULT_LOG_SAMPLE: usize = 50;

/// Metadata fields expected on (nearly) every record, in reporting order.
const METADATA_FIELDS: [&str; 6] = [
    "timestamp",
    "requestId",
    "endpoint",
    "method",
    "statusCode",
    "durationMs",
];

lazy_static! {
    /// Content that must never appear in logs. Records are scanned in serialized form,
    /// so a leak is caught no matter which field carries it. One hit is counted per
    /// record per detector.
    static ref SENSITIVE_DETECTORS: Vec<(&'static str, Regex)> = vec![
        ("ssn", Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap()),
        ("credit_card", Regex::new(r"\b\d{13,19}\b").unwrap()),
        (
            "api_key",
            Regex::new(r#"(?i)(api[_-]?key|bearer|authorization)\s*[:=]\s*['"]?[A-Za-z0-9\-_]{20,}['"]?"#)
                .unwrap(),
        ),
        (
            "password",
            Regex::new(r#"(?i)(password|passwd|pwd)\s*[:=]\s*['"]?[^'"]{6,}['"]?"#).unwrap(),
        ),
        (
            "email",
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
        ),
        ("phone", Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap()),
        (
            "pii_names",
            Regex::new(r"(?i)(first_name|last_name|full_name|name)\s*[:=]").unwrap(),
        ),
        ("ip_address", Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap()),
    ];
}

/// Validate a sampled batch of log records.
///
/// Zero records is WARN, never FAIL or PENDING: absence of evidence is not evidence of
/// misconfiguration, but it needs operator attention.
pub fn validate_log_content(records: &[LogRecord]) -> CheckResult {
    if records.is_empty() {
        return CheckResult::new(
            Outcome::Warn,
            "No log records available for analysis. Ensure logging is enabled on the deployment.",
        );
    }

    if let Some(warn) = validate_structure(records) {
        return warn;
    }
    if let Some(fail) = scan_sensitive(records) {
        return fail;
    }
    metadata_presence(records)
}

/// Every record must carry `timestamp`, `level`, and `message`. Partial log
/// availability is expected, so this warns rather than failing the claim.
fn validate_structure(records: &[LogRecord]) -> Option<CheckResult> {
    let mut invalid: Vec<(usize, Vec<&'static str>)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let mut missing = Vec::new();
        if record.timestamp.is_none() {
            missing.push("timestamp");
        }
        if record.level.is_none() {
            missing.push("level");
        }
        if record.message.is_none() {
            missing.push("message");
        }
        if !missing.is_empty() {
            invalid.push((index, missing));
        }
    }

    if invalid.is_empty() {
        return None;
    }

    let examples = invalid
        .iter()
        .take(3)
        .map(|(index, fields)| format!("record {index}: missing {}", fields.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");

    Some(CheckResult::new(
        Outcome::Warn,
        format!(
            "Found {} records with missing required fields. Examples: {examples}",
            invalid.len()
        ),
    ))
}

/// Serialize each record and run the detector battery over the text. Any hit is an
/// unconditional FAIL.
fn scan_sensitive(records: &[LogRecord]) -> Option<CheckResult> {
    let mut hits: BTreeMap<&'static str, u32> = BTreeMap::new();

    for record in records {
        let Ok(text) = serde_json::to_string(record) else {
            continue;
        };
        for (name, pattern) in SENSITIVE_DETECTORS.iter() {
            if pattern.is_match(&text) {
                *hits.entry(name).or_insert(0) += 1;
            }
        }
    }

    if hits.is_empty() {
        return None;
    }

    let matched = hits
        .iter()
        .map(|(name, count)| format!("{name} ({count}x)"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(CheckResult::new(
        Outcome::Fail,
        format!(
            "Sensitive data detected in logs: {matched}. Logs must not contain PII or credentials."
        ),
    ))
}

/// Count presence of the six expected metadata fields across all records. A field
/// present in fewer than 80% of records is missing; exactly 80% passes (tolerance for
/// legitimately-absent fields, e.g. statusCode on a record with no response yet).
fn metadata_presence(records: &[LogRecord]) -> CheckResult {
    let total = records.len();
    let mut counts = [0usize; 6];

    for record in records {
        if record.timestamp.is_some() {
            counts[0] += 1;
        }
        let context = record.context.as_ref();
        if context.and_then(|c| c.request_id.as_ref()).is_some() {
            counts[1] += 1;
        }
        if context.and_then(|c| c.endpoint.as_ref()).is_some() {
            counts[2] += 1;
        }
        if context.and_then(|c| c.method.as_ref()).is_some() {
            counts[3] += 1;
        }
        let data = record.data.as_ref();
        if data.and_then(|d| d.status_code.as_ref()).is_some() {
            counts[4] += 1;
        }
        if data.and_then(|d| d.duration_ms.as_ref()).is_some() {
            counts[5] += 1;
        }
    }

    // present iff count/total >= 4/5, in integers
    let missing: Vec<&str> = METADATA_FIELDS
        .iter()
        .zip(counts)
        .filter(|(_, count)| count * 5 < total * 4)
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        CheckResult::new(
            Outcome::Pass,
            format!(
                "All metadata fields present in {total} records. \
                 Metadata-only logging confirmed, no sensitive data in logs."
            ),
        )
    } else {
        CheckResult::new(
            Outcome::Warn,
            format!(
                "Some metadata fields missing from logs: {}. Logs should include \
                 timestamp, requestId, endpoint, method, statusCode, durationMs.",
                missing.join(", ")
            ),
        )
    }
}
