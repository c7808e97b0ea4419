//! Logging system initialization

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;

/// Installs the global subscriber writing to the configured log file.
///
/// Returns `None` when no file is configured. The guard must be kept alive
/// for the lifetime of the program so buffered lines get flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.file.as_ref() else {
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level filter '{}'", config.level))?;

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}
