//! Error types for rollcall-render.

use thiserror::Error;

/// All errors that can arise from view materialization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
