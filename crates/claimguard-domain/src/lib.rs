//! Pure claim evaluation (no IO).
//!
//! Input: the claim registry plus a set of check bindings constructed elsewhere.
//! Output: one result per registered claim, ready for rendering.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod executor;
pub mod logscan;
pub mod registry;

mod engine;

pub use engine::{CheckBindings, CheckFn, ResultSet, run_all};
pub use executor::{CheckError, execute};
pub use registry::{ClaimRegistry, DuplicateClaim};

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod proptests;
