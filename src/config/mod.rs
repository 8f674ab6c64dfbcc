//! Engine configuration.
//!
//! The defaults reproduce a classic pocket calculator: six fractional digits
//! on screen. Everything can be overridden from a TOML table.

use crate::core::DEFAULT_MAX_FRACTION_DIGITS;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Largest fractional precision accepted. Beyond this an `f64` only adds noise.
pub const MAX_FRACTION_DIGITS_LIMIT: usize = 15;

/// Default number of inputs kept in the engine's history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Tunable engine behavior.
///
/// # Example
///
/// ```rust
/// use abacus::config::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("max_fraction_digits = 2").unwrap();
/// assert_eq!(config.max_fraction_digits, 2);
/// assert_eq!(config.history_capacity, 256);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on digits after the decimal point in computed values
    pub max_fraction_digits: usize,

    /// How many handled inputs to remember; 0 disables history
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a configuration from TOML. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::InvalidFractionDigits {
                found: self.max_fraction_digits,
                max: MAX_FRACTION_DIGITS_LIMIT,
            });
        }
        Ok(())
    }

    pub fn records_history(&self) -> bool {
        self.history_capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_shows_six_digits() {
        let config = EngineConfig::default();
        assert_eq!(config.max_fraction_digits, 6);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert!(config.records_history());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config =
            EngineConfig::from_toml_str("max_fraction_digits = 3\nhistory_capacity = 0").unwrap();
        assert_eq!(config.max_fraction_digits, 3);
        assert!(!config.records_history());
    }

    #[test]
    fn excessive_precision_is_rejected() {
        let err = EngineConfig::from_toml_str("max_fraction_digits = 40").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidFractionDigits { found: 40, max: 15 }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("max_fraction_digits = \"six\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
