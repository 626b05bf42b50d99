//! Logger backend that discards everything.
use std::fmt;
use std::sync::Arc;

use crate::{Level, Logger, LoggerFactory};

#[derive(Clone, Debug)]
pub struct NoopLogger {
    name: String,
}

impl NoopLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for NoopLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLoggerFactory;

impl LoggerFactory for NoopLoggerFactory {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(NoopLogger::new(name))
    }
}
