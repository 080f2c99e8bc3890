//! Tracing setup for the `cinder` binary
//!
//! Logs go to stderr without ANSI escapes so they never corrupt the
//! alternate screen. `RUST_LOG` wins over everything else.

use cinder_app::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::error::TerminalError;

/// Filter directive used when `RUST_LOG` is unset
pub fn fallback_directive(config: &AppConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    }
}

/// Build the filter from `RUST_LOG`, then the fallback directive
pub fn env_filter(config: &AppConfig, verbose: bool) -> Result<EnvFilter, TerminalError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = fallback_directive(config, verbose);
    EnvFilter::try_new(&directive)
        .map_err(|e| TerminalError::Logging(format!("invalid log level {directive:?}: {e}")))
}

/// Install the global subscriber
pub fn init_tracing(config: &AppConfig, verbose: bool) -> Result<(), TerminalError> {
    let filter = env_filter(config, verbose)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TerminalError::Logging(e.to_string()))
}
