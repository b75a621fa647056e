//! Logging setup.
//!
//! Installs a global `tracing` subscriber configured from [`LogConfig`].
//! `RUST_LOG`, when set, takes precedence over the configured level.

use crate::config::LogConfig;
use crate::error::{AutocompleteError, AutocompleteResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for `config`, preferring `RUST_LOG` when present.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| config_filter(config))
}

/// Builds the filter from the configured level alone.
pub fn config_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(&config.level)
}

/// Initialize the logging system.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> AutocompleteResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_line_number(config.source_location)
        .with_file(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.compact().finish())
    };

    result.map_err(|e| {
        AutocompleteError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}
