//! The default runtime selected by the `spoofax` binary.
use spoofax_api::SpoofaxApi;
use spoofax_log::{Level, Logger};

use crate::{Result, RuntimeConfig, RuntimeError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default implementation of [`SpoofaxApi`].
///
/// Reports its lifecycle through the logger it is handed and nothing else;
/// in particular it never writes to stdout.
#[derive(Clone, Debug)]
pub struct SpoofaxRuntime {
    config: RuntimeConfig,
}

impl SpoofaxRuntime {
    /// Create a runtime from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::EmptyInstanceName`] if the instance name is
    /// empty or whitespace.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        if config.instance.trim().is_empty() {
            return Err(RuntimeError::EmptyInstanceName);
        }
        Ok(Self { config })
    }

    /// Create a runtime configured from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(RuntimeConfig::from_env())
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl SpoofaxApi for SpoofaxRuntime {
    fn perform(&self, logger: &dyn Logger) -> anyhow::Result<()> {
        let instance = self.config.instance.as_str();

        if logger.enabled(Level::Info) {
            logger.log(
                Level::Info,
                format_args!("Spoofax runtime '{instance}' v{VERSION} starting"),
            );
        }

        if self.config.announce_config && logger.enabled(Level::Debug) {
            logger.log(Level::Debug, format_args!("Configuration: {:?}", self.config));
        }

        if logger.enabled(Level::Info) {
            logger.log(
                Level::Info,
                format_args!("Spoofax runtime '{instance}' finished"),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_instance_names() {
        assert_eq!(
            SpoofaxRuntime::new(RuntimeConfig::new("")).unwrap_err(),
            RuntimeError::EmptyInstanceName
        );
        assert_eq!(
            SpoofaxRuntime::new(RuntimeConfig::new("  \t")).unwrap_err(),
            RuntimeError::EmptyInstanceName
        );
    }

    #[test]
    fn keeps_configuration() {
        let runtime = SpoofaxRuntime::new(RuntimeConfig::new("workbench")).unwrap();
        assert_eq!(runtime.config().instance, "workbench");
    }
}
