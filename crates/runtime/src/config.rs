//! Runtime configuration structures and loaders.
use std::env;

pub const DEFAULT_INSTANCE: &str = "spoofax";

/// Settings for a [`crate::SpoofaxRuntime`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Name the runtime reports itself under.
    pub instance: String,
    /// Log the effective configuration at debug level when performing.
    pub announce_config: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            instance: DEFAULT_INSTANCE.to_string(),
            announce_config: true,
        }
    }
}

impl RuntimeConfig {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPOOFAX_INSTANCE` - Runtime instance name (default: spoofax)
    /// - `SPOOFAX_ANNOUNCE_CONFIG` - Log effective configuration (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`], reading values through `lookup`.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(instance) = lookup("SPOOFAX_INSTANCE") {
            config.instance = instance;
        }

        if let Some(announce) = lookup("SPOOFAX_ANNOUNCE_CONFIG")
            .as_deref()
            .and_then(parse_bool)
        {
            config.announce_config = announce;
        }

        config
    }
}

/// Parse a boolean environment value (`true/1/yes/on`, `false/0/no/off`).
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
