//! Use case orchestration for claimguard.
//!
//! This crate provides the application layer: it wires the claim catalogue, check
//! bindings, and renderers together. It is intentionally thin and delegates heavy
//! lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod checks;
mod report;
mod validate;

pub use checks::check_bindings;
pub use report::{report_file_name, serialize_report, to_renderable};
pub use validate::{ValidationInput, ValidationOutput, run_validation};
