//! Loosely-typed log records consumed by the log-content validator.
//!
//! Records come from an external log endpoint and are not owned by this system. The
//! well-known fields are typed as optional JSON values; everything else is preserved in
//! flattened catch-alls so the sensitive-data scan sees the full record, not just the
//! fields we happen to know about.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// One structured log record.
///
/// Expected shape (all fields optional in practice):
/// `{ "timestamp": ..., "level": ..., "message": ...,
///    "context": { "requestId": ..., "endpoint": ..., "method": ... },
///    "data": { "statusCode": ..., "durationMs": ... } }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LogData>,

    /// Unknown fields, kept verbatim for the scanner.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Request context attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<JsonValue>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Response data attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogData {
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<JsonValue>,
    #[serde(rename = "durationMs", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<JsonValue>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}
