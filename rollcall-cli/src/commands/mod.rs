//! Subcommand implementations.

pub mod avatar;
pub mod check;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};

use rollcall_core::RawSubmission;

/// Load a JSON array of raw submissions.
pub fn load_submissions(path: &Path) -> Result<Vec<RawSubmission>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submissions file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid submissions JSON in {}", path.display()))
}
