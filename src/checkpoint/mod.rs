//! Snapshots of a calculator session.
//!
//! A checkpoint captures the engine state, its configuration and its input
//! history so a session can be carried across a restart. JSON is offered for
//! readability and bincode for compactness.

use crate::config::EngineConfig;
use crate::core::{EngineState, InputHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Bookkeeping the engine keeps about a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// When the session started
    pub created_at: DateTime<Utc>,

    /// When the last input was handled
    pub updated_at: DateTime<Utc>,

    /// Inputs handled since the session started
    pub inputs_handled: usize,

    /// Inputs that left the state unchanged
    pub inputs_ignored: usize,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            inputs_handled: 0,
            inputs_ignored: 0,
        }
    }
}

/// Serializable snapshot of a calculator session.
///
/// # Example
///
/// ```rust
/// use abacus::checkpoint::Checkpoint;
/// use abacus::engine::CalculatorEngine;
/// use abacus::keypad::Token;
///
/// let mut engine = CalculatorEngine::new();
/// engine.feed([Token::digit(4).unwrap(), Token::digit(2).unwrap()]);
///
/// let json = engine.checkpoint().to_json().unwrap();
/// let restored = CalculatorEngine::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored.display_text(), "42");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Engine state at the time of the checkpoint
    pub state: EngineState,

    /// Configuration the engine was running with
    pub config: EngineConfig,

    /// Recorded inputs
    pub history: InputHistory,

    /// Session metadata
    pub metadata: SessionMetadata,
}

impl Checkpoint {
    pub fn new(
        state: EngineState,
        config: EngineConfig,
        history: InputHistory,
        metadata: SessionMetadata,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
            config,
            history,
            metadata,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that the checkpoint can be resumed by this version of the crate.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        self.config.validate()?;

        self.state
            .validate()
            .map_err(|reason| CheckpointError::InvalidState { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::keypad::Operator;

    fn sample_state() -> EngineState {
        EngineState {
            display_text: "3.5".to_string(),
            accumulator: 2.0,
            pending_operator: Some(Operator::Multiply),
            is_typing_number: true,
        }
    }

    fn sample_checkpoint() -> Checkpoint {
        Checkpoint::new(
            sample_state(),
            EngineConfig::default(),
            InputHistory::new(),
            SessionMetadata::default(),
        )
    }

    #[test]
    fn new_checkpoint_has_current_version_and_id() {
        let checkpoint = sample_checkpoint();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert!(Uuid::parse_str(&checkpoint.id).is_ok());
        assert!(checkpoint.validate().is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        assert_ne!(sample_checkpoint().id, sample_checkpoint().id);
    }

    #[test]
    fn json_preserves_state() {
        let checkpoint = sample_checkpoint();
        let json = checkpoint.to_json_pretty().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();

        assert_eq!(restored.id, checkpoint.id);
        assert_eq!(restored.state, sample_state());
        assert_eq!(restored.metadata, checkpoint.metadata);
    }

    #[test]
    fn binary_preserves_state() {
        let checkpoint = sample_checkpoint();
        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::from_binary(&bytes).unwrap();

        assert_eq!(restored.state, sample_state());
        assert_eq!(restored.config, EngineConfig::default());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = sample_checkpoint();
        checkpoint.version = 99;
        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn corrupted_state_is_rejected() {
        let mut checkpoint = sample_checkpoint();
        checkpoint.state.display_text = "1..2".to_string();
        match checkpoint.validate() {
            Err(CheckpointError::InvalidState { reason }) => {
                assert!(reason.contains("more than one decimal point"));
            }
            other => panic!("expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut checkpoint = sample_checkpoint();
        checkpoint.config.max_fraction_digits = 30;
        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::InvalidConfig(
                ConfigError::InvalidFractionDigits { found: 30, .. }
            ))
        ));
    }

    #[test]
    fn typing_on_empty_display_is_rejected() {
        let mut checkpoint = sample_checkpoint();
        checkpoint.state.display_text.clear();
        let err = checkpoint.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Checkpoint holds an impossible calculator state: typing flag set on an empty display"
        );
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
