//! Named logger handles for Spoofax components.
//!
//! # Architecture
//!
//! ```text
//! LoggerFactory (backend, queried by name)
//!   └─→ Arc<dyn Logger> (handle, passed by reference to the runtime)
//! ```
//!
//! Components never reach for global logging state directly. They receive a
//! [`Logger`] handle from whoever composed them, and the composition root picks
//! the backend through a [`LoggerFactory`]:
//!
//! - [`TracingLoggerFactory`]: forwards to the installed `tracing` subscriber
//! - [`NoopLoggerFactory`]: discards every message (tests, silent embedding)

mod backend;
mod level;
mod logger;
mod noop;

pub use backend::{TracingLogger, TracingLoggerFactory};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerFactory};
pub use noop::{NoopLogger, NoopLoggerFactory};

/// Name of the logger handed to the runtime by the bootstrap.
pub const ROOT_LOGGER: &str = "root";
