//! Single-check invocation with uniform failure translation.
//!
//! A check signals failure through a tagged result rather than a panic: either it is
//! intentionally unfinished (`NotImplemented`) or it hit something it could not recover
//! from (`Crashed`). The executor converts the first into a reportable PENDING result;
//! the second is left for the aggregator, which owns run-wide containment.

use claimguard_types::{CheckResult, Outcome};
use std::fmt;

/// How a check can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// The check is intentionally unfinished. The message describes the outstanding
    /// verification work and becomes the PENDING detail.
    NotImplemented(String),
    /// Anything else. Contained per claim by the aggregator, never propagated across
    /// the run.
    Crashed(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::NotImplemented(msg) => write!(f, "not implemented: {msg}"),
            CheckError::Crashed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CheckError {}

/// Invoke one check.
///
/// - a completed check's result is returned untouched, never re-mapped
/// - `NotImplemented` becomes `(PENDING, message)`
/// - `Crashed` propagates; the caller decides what a crash means for the run
pub fn execute(
    check: impl FnOnce() -> Result<CheckResult, CheckError>,
) -> Result<CheckResult, String> {
    match check() {
        Ok(result) => Ok(result),
        Err(CheckError::NotImplemented(msg)) => Ok(CheckResult::new(Outcome::Pending, msg)),
        Err(CheckError::Crashed(msg)) => Err(msg),
    }
}
