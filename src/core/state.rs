//! Calculator state and the `State` trait it implements.
//!
//! The state is plain data. Everything that changes it lives in
//! [`crate::engine`]; everything here only inspects it.

use super::format::is_special_symbol;
use crate::keypad::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are values describing where the machine is,
/// and must be cloneable and serializable so they can be recorded in history
/// and written into checkpoints.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Coarse classification of an [`EngineState`], derived from its fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered since start or the last clear.
    Ready,
    /// Composing the first operand.
    Entering,
    /// Operator chosen, waiting for the second operand.
    OperatorPending,
    /// Composing the second operand.
    EnteringOperand,
    /// Showing a result or a transformed value.
    Settled,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::EnteringOperand => "EnteringOperand",
            Self::Settled => "Settled",
        }
    }
}

/// Everything the calculator remembers between button presses.
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, Phase, State};
///
/// let state = EngineState::default();
/// assert_eq!(state.display_text, "");
/// assert_eq!(state.display_value(), None);
/// assert_eq!(state.phase(), Phase::Ready);
/// assert_eq!(state.name(), "Ready");
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct EngineState {
    /// Text shown to the user. Empty is valid and means nothing entered.
    pub display_text: String,
    /// Left-hand operand of the pending operation.
    #[serde(with = "lenient_float")]
    pub accumulator: f64,
    /// Operator selected but not yet applied.
    pub pending_operator: Option<Operator>,
    /// True while the display holds a number being typed.
    pub is_typing_number: bool,
}

impl EngineState {
    /// The display parsed as a number, `None` when empty or not numeric.
    pub fn display_value(&self) -> Option<f64> {
        self.display_text.parse::<f64>().ok()
    }

    pub fn phase(&self) -> Phase {
        match (self.pending_operator.is_some(), self.is_typing_number) {
            (false, true) => Phase::Entering,
            (true, false) => Phase::OperatorPending,
            (true, true) => Phase::EnteringOperand,
            (false, false) if self.display_text.is_empty() => Phase::Ready,
            (false, false) => Phase::Settled,
        }
    }

    /// Check the invariants every reachable state satisfies.
    ///
    /// Used when a state comes from outside the engine, e.g. a checkpoint.
    pub fn validate(&self) -> Result<(), String> {
        let text = &self.display_text;

        if text.matches('.').count() > 1 {
            return Err(format!("display '{text}' has more than one decimal point"));
        }
        if self.is_typing_number && text.is_empty() {
            return Err("typing flag set on an empty display".to_string());
        }
        let settled = !self.is_typing_number && !text.is_empty();
        if settled && self.display_value().is_none() && !is_special_symbol(text) {
            return Err(format!("display '{text}' is not a number"));
        }
        Ok(())
    }
}

impl State for EngineState {
    fn name(&self) -> &str {
        self.phase().name()
    }

    /// A calculator never finishes; clear always brings it back.
    fn is_final(&self) -> bool {
        false
    }

    fn is_error(&self) -> bool {
        !self.accumulator.is_finite()
    }
}

/// Serde adapter for `f64` fields that may hold infinities or NaN.
///
/// Human-readable formats such as JSON have no literal for non-finite
/// numbers, so those values are written as the strings `inf`, `-inf` and
/// `NaN`. Binary formats store the float unchanged.
mod lenient_float {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() || !serializer.is_human_readable() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        if !deserializer.is_human_readable() {
            return f64::deserialize(deserializer);
        }
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid number '{text}'"))),
        }
    }
}
