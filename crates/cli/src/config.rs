//! Logging configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use spoofax_runtime::config::parse_bool;

use crate::logging;

pub const DEFAULT_FILTER: &str = "info";

/// Configuration for the process-wide logging backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `spoofax_runtime=debug,warn`.
    pub filter: String,
    /// Directory for the log file; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    /// Colorize stderr output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPOOFAX_LOG` - Filter directive (default: `RUST_LOG`, then info)
    /// - `SPOOFAX_LOG_FILE` - Also write `spoofax.log` (default: false)
    /// - `SPOOFAX_LOG_DIR` - Directory for the log file (default: platform cache dir);
    ///   setting it implies `SPOOFAX_LOG_FILE`
    /// - `SPOOFAX_LOG_ANSI` - Colorize stderr output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("SPOOFAX_LOG").or_else(|| lookup("RUST_LOG")) {
            config.filter = filter;
        }

        let explicit_dir = lookup("SPOOFAX_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        let file_enabled = lookup("SPOOFAX_LOG_FILE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(explicit_dir.is_some());

        if file_enabled {
            config.log_dir = Some(explicit_dir.unwrap_or_else(logging::default_log_dir));
        }

        if let Some(ansi) = lookup("SPOOFAX_LOG_ANSI").as_deref().and_then(parse_bool) {
            config.ansi = ansi;
        }

        config
    }
}
