//! File-backed tracing setup. The terminal belongs to the UI, so logs never go to stdout.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_FILE_NAME: &str = "todolist.log";

/// Install the global subscriber if logging was requested.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.logging_enabled() {
        return Ok(None);
    }
    let dir = config
        .resolved_log_dir()
        .context("Could not determine a log directory")?;
    let filter = EnvFilter::try_new(config.log_filter())
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter()))?;

    init_in(&dir, filter).map(Some)
}

fn init_in(dir: &Path, filter: EnvFilter) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!("todolist v{} logging to {}", env!("CARGO_PKG_VERSION"), dir.display());
    Ok(guard)
}
