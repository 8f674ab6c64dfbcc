//! Errors raised while saving or resuming a calculator session.

use crate::config::ConfigError;
use thiserror::Error;

/// Why a session snapshot could not be written, read or resumed
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The session could not be encoded as JSON or bincode
    #[error("Failed to encode session checkpoint: {0}")]
    SerializationFailed(String),

    /// The bytes or text do not decode to a session checkpoint
    #[error("Failed to decode session checkpoint: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written in a format this crate cannot read
    #[error("Checkpoint format version {found} is not readable, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The saved calculator state breaks an engine invariant
    #[error("Checkpoint holds an impossible calculator state: {reason}")]
    InvalidState { reason: String },

    /// The saved engine configuration is out of range
    #[error("Checkpoint holds an invalid engine configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
