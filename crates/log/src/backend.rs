//! Logger backend forwarding to the installed `tracing` subscriber.
//!
//! Every message becomes a `tracing` event carrying a `logger` field with the
//! handle's name, so subscriber-side filtering and formatting stay in one place.
use std::fmt;
use std::sync::Arc;

use crate::{Level, Logger, LoggerFactory};

#[derive(Clone, Debug)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, level: Level) -> bool {
        // `enabled!` needs a constant level per callsite.
        match level {
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        let name = self.name.as_str();
        match level {
            Level::Trace => tracing::trace!(logger = name, "{}", message),
            Level::Debug => tracing::debug!(logger = name, "{}", message),
            Level::Info => tracing::info!(logger = name, "{}", message),
            Level::Warn => tracing::warn!(logger = name, "{}", message),
            Level::Error => tracing::error!(logger = name, "{}", message),
        }
    }
}

/// Hands out [`TracingLogger`]s; the subscriber itself is configured elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLoggerFactory;

impl TracingLoggerFactory {
    pub const fn new() -> Self {
        Self
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(TracingLogger::new(name))
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_capture(max_level: tracing::Level, f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(max_level)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn factory_names_loggers() {
        let logger = TracingLoggerFactory::new().logger(crate::ROOT_LOGGER);
        assert_eq!(logger.name(), "root");
    }

    #[test]
    fn forwards_messages_with_logger_field() {
        let output = with_capture(tracing::Level::INFO, || {
            let logger = TracingLogger::new("root");
            logger.info("runtime started");
            logger.warn("careful");
        });

        assert!(output.contains("runtime started"), "output: {output}");
        assert!(output.contains("logger="), "output: {output}");
        assert!(output.contains("root"), "output: {output}");
        assert!(output.contains("WARN"), "output: {output}");
    }

    #[test]
    fn filtered_levels_are_not_emitted() {
        let output = with_capture(tracing::Level::INFO, || {
            let logger = TracingLogger::new("root");
            assert!(!logger.enabled(Level::Debug));
            assert!(logger.enabled(Level::Error));
            logger.debug("hidden detail");
        });

        assert!(!output.contains("hidden detail"), "output: {output}");
    }
}
