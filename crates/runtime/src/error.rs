//! Errors surfaced while constructing or running a runtime.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("runtime instance name must not be empty")]
    EmptyInstanceName,
}
