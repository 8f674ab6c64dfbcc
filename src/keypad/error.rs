//! Keypad parsing errors.

use thiserror::Error;

/// Errors that can occur when turning text into keypad tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenParseError {
    #[error("Empty input does not name a key")]
    Empty,

    #[error("Unknown key '{0}'")]
    Unknown(String),
}
