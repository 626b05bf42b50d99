//! Default Spoofax runtime.
//!
//! [`SpoofaxRuntime`] is the implementation of [`spoofax_api::SpoofaxApi`] the
//! `spoofax` binary selects. Modules are organized by responsibility:
//! - [`config`] loads runtime settings from the environment
//! - [`error`] holds the failures surfaced while constructing a runtime
//! - [`runtime`] hosts the runtime itself
pub mod config;
pub mod error;
pub mod runtime;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use runtime::SpoofaxRuntime;
