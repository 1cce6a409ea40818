//! File-backed tracing setup
//!
//! The dashboard owns the terminal, so log lines go to a file instead of
//! stderr.

use crate::error::AppError;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Send tracing output to `path`; the terminal belongs to the dashboard.
/// Without `debug` the level is pinned to `info` so a stray `RUST_LOG`
/// does not flood the file. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(path: &Path, debug: bool) -> Result<WorkerGuard, AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logging(format!("{}: {e}", path.display())))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(guard)
}
