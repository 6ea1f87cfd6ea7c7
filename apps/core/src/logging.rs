//! Structured logging setup using `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the configured filter is used.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ShaperConfig};
use crate::error::AppError;

/// Builds the filter from `RUST_LOG`, falling back to `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// reserved for command output.
///
/// # Errors
///
/// Returns [`AppError::Config`] if a global subscriber is already installed.
pub fn init(config: &ShaperConfig) -> Result<(), AppError> {
    let (json_layer, pretty_layer) = match config.log_format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to install log subscriber: {}", e)))
}
