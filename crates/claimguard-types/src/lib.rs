//! Stable DTOs and IDs used across the claimguard workspace.
//!
//! This crate is intentionally boring:
//! - the outcome/result vocabulary shared by every check
//! - static claim descriptors and stable claim IDs
//! - the loosely-typed log record consumed by the log validator
//! - the emitted report envelope

#![forbid(unsafe_code)]

pub mod claim;
pub mod ids;
pub mod log;
pub mod report;

pub use claim::{CheckResult, Claim, ClaimCategory, Outcome};
pub use log::{LogContext, LogData, LogRecord};
pub use report::{
    ClaimResultEntry, SCHEMA_REPORT_V1, ToolMeta, ValidationReport, ValidationSummary,
};
