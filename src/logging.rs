//! Logging setup.
//!
//! Logs go to stderr so that reports and plots on stdout stay pipeable.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, EXIT_USAGE};

/// Install the global subscriber with the given filter directive.
pub fn init_logging(filter: &str) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Invalid log filter '{filter}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to initialize logging: {e}")))
}
