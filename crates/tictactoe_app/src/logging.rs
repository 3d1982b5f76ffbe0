//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error, for headless runs.
    Stderr,
    /// A file, so the terminal UI is not overdrawn.
    File(PathBuf),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice keeps the first
/// subscriber.
pub fn init(default_filter: &str, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let log_file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
    }

    Ok(())
}
