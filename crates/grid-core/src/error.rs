// File: crates/grid-core/src/error.rs
// Summary: Error type for grid rendering; anchor lookup is the only fallible step.

use thiserror::Error;

/// Rendering errors surfaced to the caller. Caller-supplied accessor closures
/// that panic during a render are not caught here; they abort the render pass
/// exactly as an uncaught exception would.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no element with class '{selector}' on the surface")]
    AnchorNotFound { selector: String },

    #[error("invalid class selector '{selector}'")]
    InvalidSelector { selector: String },
}
