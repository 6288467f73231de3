//! Diagnostic logging
//!
//! The TUI owns the terminal, so logs only ever go to a file. Without a log
//! file no subscriber is installed and `tracing` events are dropped.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install a file-backed `tracing` subscriber at `level`
///
/// `level` takes `EnvFilter` directives, e.g. `info` or `gimme_five=debug`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or `level` does not parse.
pub fn init_file_logging(path: &Path, level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{level}'"))?;
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Don't fail if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
