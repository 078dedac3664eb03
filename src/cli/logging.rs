//! Logging setup.
//!
//! The filter comes from `MARKET_SHIFTER_LOG`, then `RUST_LOG`, and defaults
//! to `warn`.

use super::CliError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MARKET_SHIFTER_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub(crate) fn init_stderr() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to initialize logging: {e}")))
}

/// Log to `path`, or nowhere when no path is given.
///
/// Used by the TUI, where anything written to the terminal would corrupt
/// the screen.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub(crate) fn init(path: Option<&Path>) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .map_err(|e| CliError::new(format!("Failed to create log file {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to initialize logging: {e}")))
}
