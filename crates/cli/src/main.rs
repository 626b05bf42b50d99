//! Spoofax bootstrap binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Logging backend (tracing subscriber) via `logging::setup_logging`
//! 2. Logger factory bound to that backend
//! 3. Runtime provider (`SpoofaxRuntime::from_env`)
//!
//! and hands them to [`Bootstrap`], which requests the `root` logger and calls
//! the runtime once. Errors are returned from `main` untouched, so a failure
//! is printed to stderr and the process exits non-zero.
//!
//! # Examples
//!
//! ```bash
//! # Default run, runtime lifecycle on stderr
//! cargo run -p spoofax-cli
//!
//! # Debug output and a log file under ./logs
//! SPOOFAX_LOG=debug SPOOFAX_LOG_DIR=./logs cargo run -p spoofax-cli
//! ```

use anyhow::Result;
use clap::Parser;
use spoofax_cli::{Bootstrap, LogConfig, logging};
use spoofax_log::TracingLoggerFactory;
use spoofax_runtime::SpoofaxRuntime;

/// Launch the Spoofax runtime
#[derive(Parser, Debug)]
#[command(name = "spoofax")]
#[command(about = "Launch the Spoofax runtime", long_about = None)]
#[command(version)]
struct Cli {
    /// Accepted for compatibility; not interpreted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. Load logging configuration from environment
    let log_config = LogConfig::from_env();

    // 2. Setup logging (guard flushes the log file on exit)
    let _guard = logging::setup_logging(&log_config)?;

    tracing::debug!(args = ?cli.args, "Ignoring process arguments");

    // 3. Wire and run (runtime reads its own configuration when constructed)
    Bootstrap::builder()
        .logger_factory(TracingLoggerFactory::new())
        .runtime(SpoofaxRuntime::from_env)
        .build()?
        .run()
}
