//! Logger handle and factory traits.
use std::fmt;
use std::sync::Arc;

use crate::Level;

/// Opaque sink for diagnostic messages, identified by name.
///
/// Implementations only need [`Logger::name`], [`Logger::enabled`] and
/// [`Logger::log`]; the per-level helpers skip formatting when the level is
/// disabled.
///
/// # Example Implementation
///
/// ```
/// use std::fmt;
/// use spoofax_log::{Level, Logger};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn name(&self) -> &str {
///         "stderr"
///     }
///
///     fn enabled(&self, level: Level) -> bool {
///         level >= Level::Warn
///     }
///
///     fn log(&self, level: Level, message: fmt::Arguments<'_>) {
///         eprintln!("[{level}] {message}");
///     }
/// }
///
/// StderrLogger.warn("disk almost full");
/// ```
pub trait Logger: Send + Sync {
    /// Name the logger was obtained under.
    fn name(&self) -> &str;

    /// Returns true if messages at `level` would be recorded.
    fn enabled(&self, level: Level) -> bool;

    /// Record a message unconditionally.
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    fn trace(&self, message: &str) {
        log_str(self, Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        log_str(self, Level::Debug, message);
    }

    fn info(&self, message: &str) {
        log_str(self, Level::Info, message);
    }

    fn warn(&self, message: &str) {
        log_str(self, Level::Warn, message);
    }

    fn error(&self, message: &str) {
        log_str(self, Level::Error, message);
    }
}

fn log_str<L: Logger + ?Sized>(logger: &L, level: Level, message: &str) {
    if logger.enabled(level) {
        logger.log(level, format_args!("{message}"));
    }
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name()).finish()
    }
}

/// Logging backend queried by logger name.
pub trait LoggerFactory: Send + Sync {
    fn logger(&self, name: &str) -> Arc<dyn Logger>;
}

impl<F: LoggerFactory + ?Sized> LoggerFactory for Arc<F> {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        (**self).logger(name)
    }
}

impl<F: LoggerFactory + ?Sized> LoggerFactory for Box<F> {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        (**self).logger(name)
    }
}
