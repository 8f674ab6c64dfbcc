//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading an engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// More fractional digits requested than an `f64` can carry
    #[error("max_fraction_digits must be at most {max}, got {found}")]
    InvalidFractionDigits { found: usize, max: usize },
}
