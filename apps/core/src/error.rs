use thiserror::Error;

/// Crate-wide error type.
///
/// The shaping pipelines themselves never fail: unmatched patterns fall
/// through to defaults. Errors only arise at the edges, when building a custom
/// pattern table or loading configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// A user-supplied pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Represents data validation errors (e.g., out-of-range settings).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
