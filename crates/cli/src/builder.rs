//! Bootstrap builder with dependency injection pattern.

use anyhow::{Context, Result};
use spoofax_api::SpoofaxApi;
use spoofax_log::{LoggerFactory, ROOT_LOGGER};

use crate::{Bootstrap, RuntimeProvider};

/// Builder for constructing a [`Bootstrap`] with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: logger factory and runtime provider must be provided
/// - **Optional fields**: logger name (defaults to `"root"`)
/// - **Fail-fast validation**: missing required fields cause build() to fail
/// - **Deferred construction**: the runtime is only built inside `run()`
pub struct BootstrapBuilder {
    logger_factory: Option<Box<dyn LoggerFactory>>,
    logger_name: String,
    runtime: Option<RuntimeProvider>,
}

impl Default for BootstrapBuilder {
    fn default() -> Self {
        Self {
            logger_factory: None,
            logger_name: ROOT_LOGGER.to_string(),
            runtime: None,
        }
    }
}

impl BootstrapBuilder {
    /// Create a new BootstrapBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logging backend (required).
    pub fn logger_factory(mut self, factory: impl LoggerFactory + 'static) -> Self {
        self.logger_factory = Some(Box::new(factory));
        self
    }

    /// Override the name the logger is requested under.
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = name.into();
        self
    }

    /// Set the runtime provider (required).
    ///
    /// The provider runs once, inside [`Bootstrap::run`], after the logger has
    /// been obtained. Its error type is converted into `anyhow::Error` without
    /// added context.
    pub fn runtime<A, E, F>(mut self, provider: F) -> Self
    where
        A: SpoofaxApi + 'static,
        E: Into<anyhow::Error>,
        F: FnOnce() -> std::result::Result<A, E> + 'static,
    {
        self.runtime = Some(Box::new(move || -> Result<Box<dyn SpoofaxApi>> {
            let runtime = provider().map_err(Into::<anyhow::Error>::into)?;
            Ok(Box::new(runtime) as Box<dyn SpoofaxApi>)
        }));
        self
    }

    /// Build the Bootstrap.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Logger factory is not set (required)
    /// - Runtime provider is not set (required)
    pub fn build(self) -> Result<Bootstrap> {
        let logger_factory = self
            .logger_factory
            .context("Logger factory is required. Use .logger_factory() to set it.")?;

        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        Ok(Bootstrap {
            logger_factory,
            logger_name: self.logger_name,
            runtime,
        })
    }
}
