//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file under
//! `${FOLIO_HOME}/logs`. One-shot commands log to stderr. The filter comes
//! from `FOLIO_LOG` and defaults to `folio=info`.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "FOLIO_LOG";
pub const LOG_FILE: &str = "folio.log";
const DEFAULT_FILTER: &str = "folio=info,folio_core=info,folio_tui=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Routes logs to `<dir>/folio.log`. Keep the returned guard alive until
/// exit so buffered lines are flushed.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_file_logging(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Routes logs to stderr.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}
