pub mod composite;
pub mod config;
pub mod pick;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Create a kept temp file for the pick session and return its path.
pub(crate) fn temp_session_path() -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("starstack-session-")
        .suffix(".toml")
        .tempfile()
        .context("Failed to create session file")?;
    let (_, path) = file.keep().context("Failed to keep session file")?;
    Ok(path)
}
