//! Process bootstrap wiring a logger and a runtime together.
//!
//! # Architecture
//!
//! ```text
//! Bootstrap (composition root)
//!   ├─→ LoggerFactory (queried once for the "root" logger)
//!   └─→ Runtime provider (constructs one SpoofaxApi implementation)
//! ```
//!
//! [`Bootstrap::run`] is a straight line: obtain the logger, construct the
//! runtime, call [`SpoofaxApi::perform`]. It performs no I/O of its own and
//! handles no errors; whatever the runtime returns reaches the caller as is.
//!
//! The `spoofax` binary selects [`spoofax_log::TracingLoggerFactory`] and
//! [`spoofax_runtime::SpoofaxRuntime`]; tests inject stubs through
//! [`BootstrapBuilder`].

mod builder;
pub mod config;
pub mod logging;

pub use builder::BootstrapBuilder;
pub use config::LogConfig;

use anyhow::Result;
use spoofax_api::SpoofaxApi;
use spoofax_log::LoggerFactory;

/// Deferred construction of the runtime, invoked once by [`Bootstrap::run`].
pub type RuntimeProvider = Box<dyn FnOnce() -> Result<Box<dyn SpoofaxApi>>>;

/// Wires one logger and one runtime, then delegates to the runtime.
///
/// # Lifecycle
///
/// 1. `Bootstrap::builder()` collects the logger factory and runtime provider
/// 2. `Bootstrap::run()` asks the factory for the named logger
/// 3. `Bootstrap::run()` constructs the runtime through the provider
/// 4. `Bootstrap::run()` invokes `perform` with that exact logger
pub struct Bootstrap {
    logger_factory: Box<dyn LoggerFactory>,
    logger_name: String,
    runtime: RuntimeProvider,
}

impl Bootstrap {
    /// Create a new BootstrapBuilder.
    pub fn builder() -> BootstrapBuilder {
        BootstrapBuilder::new()
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Run the bootstrap to completion on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns, unchanged, the error of the runtime provider or of
    /// [`SpoofaxApi::perform`]. If the provider fails, `perform` is never
    /// invoked.
    pub fn run(self) -> Result<()> {
        let logger = self.logger_factory.logger(&self.logger_name);
        let runtime = (self.runtime)()?;
        runtime.perform(&*logger)
    }
}
