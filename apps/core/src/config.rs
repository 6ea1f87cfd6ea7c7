//! Shaper configuration.
//!
//! Settings come from the environment (optionally seeded from a `.env` file).
//! Every setting has a default, and the defaults reproduce the stock
//! classifier behavior exactly.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

/// Minimum trimmed message length (in characters) before a message is
/// considered long enough to act on.
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;

pub const ENV_MIN_MESSAGE_CHARS: &str = "SOLACE_MIN_MESSAGE_CHARS";
pub const ENV_LOG_FILTER: &str = "SOLACE_LOG";
pub const ENV_LOG_FORMAT: &str = "SOLACE_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines on stderr
    Pretty,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Runtime configuration for the shaper and its binary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShaperConfig {
    /// Messages whose trimmed length is below this are flagged as too short.
    #[validate(range(min = 1, max = 200))]
    pub min_message_chars: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[validate(length(min = 1))]
    pub log_filter: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self {
            min_message_chars: DEFAULT_MIN_MESSAGE_CHARS,
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ShaperConfig {
    /// Loads `.env` (if present), then reads the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is the normal case.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Reads settings from the process environment, falling back to defaults
    /// for unset variables, and validates the result.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_MIN_MESSAGE_CHARS) {
            config.min_message_chars = raw.trim().parse().map_err(|e| {
                AppError::Config(format!(
                    "{} must be a positive integer, got '{}': {}",
                    ENV_MIN_MESSAGE_CHARS, raw, e
                ))
            })?;
        }

        if let Ok(filter) = env::var(ENV_LOG_FILTER) {
            config.log_filter = filter.trim().to_string();
        }

        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}
