//! Process-wide `tracing` subscriber setup.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::LogConfig;

pub const LOG_FILE_NAME: &str = "spoofax.log";

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/org.metaborg.spoofax/logs`
/// - Linux: `~/.cache/spoofax/logs` (or `$XDG_CACHE_HOME/spoofax/logs`)
/// - Windows: `%LOCALAPPDATA%\metaborg\spoofax\cache\logs`
/// - Fallback: `/tmp/spoofax/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "metaborg", "spoofax")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/spoofax"))
        .join("logs")
}

/// Install the global subscriber: stderr always, plus a log file when
/// `config.log_dir` is set.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the process is done logging.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid, the log directory
/// cannot be created, or a global subscriber is already installed.
pub fn setup_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
