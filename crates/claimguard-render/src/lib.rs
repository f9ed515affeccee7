//! Rendering utilities for human-facing outputs (checklist, compliance report, script
//! template).

#![forbid(unsafe_code)]

mod checklist;
mod model;
mod script;
mod summary;

pub use checklist::render_checklist;
pub use model::{RenderableCategory, RenderableClaim, RenderableReport};
pub use script::render_test_script;
pub use summary::render_summary;
