//! Input history tracking.
//!
//! Records which key was pressed and what the state looked like before and
//! after. The history is an audit trail; the engine never walks it backwards.

use super::state::EngineState;
use crate::keypad::Token;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single handled input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputTransition {
    /// The key that was pressed
    pub input: Token,
    /// The state before the key was handled
    pub from: EngineState,
    /// The state after the key was handled
    pub to: EngineState,
    /// When the key was handled
    pub timestamp: DateTime<Utc>,
}

impl InputTransition {
    /// Whether handling the input changed anything.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of handled inputs.
///
/// `record` takes the history by value and hands it back with the new entry
/// appended, so histories compose like plain values.
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, InputHistory, InputTransition};
/// use abacus::keypad::Token;
/// use chrono::Utc;
///
/// let typed = EngineState {
///     display_text: "7".to_string(),
///     is_typing_number: true,
///     ..EngineState::default()
/// };
///
/// let history = InputHistory::new().record(InputTransition {
///     input: Token::digit(7).unwrap(),
///     from: EngineState::default(),
///     to: typed,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.display_path(), vec!["", "7"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputHistory {
    transitions: VecDeque<InputTransition>,
}

impl InputHistory {
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(mut self, transition: InputTransition) -> Self {
        self.transitions.push_back(transition);
        self
    }

    /// Keep only the newest `capacity` transitions.
    pub fn retain_last(mut self, capacity: usize) -> Self {
        let excess = self.transitions.len().saturating_sub(capacity);
        self.transitions.drain(..excess);
        self
    }

    /// Display text before the first recorded input, then after each input.
    pub fn display_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from.display_text.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.display_text.as_str());
        }
        path
    }

    /// Time between the first and last recorded input.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Inputs in the order they were handled.
    pub fn inputs(&self) -> Vec<Token> {
        self.transitions.iter().map(|t| t.input).collect()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &InputTransition> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&InputTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::Operator;

    fn typed(display: &str) -> EngineState {
        EngineState {
            display_text: display.to_string(),
            is_typing_number: true,
            ..EngineState::default()
        }
    }

    fn transition(input: Token, from: EngineState, to: EngineState) -> InputTransition {
        InputTransition {
            input,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = InputHistory::new();
        assert!(history.is_empty());
        assert!(history.display_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn display_path_returns_display_sequence() {
        let one = Token::digit(1).unwrap();
        let two = Token::digit(2).unwrap();
        let history = InputHistory::new()
            .record(transition(one, EngineState::default(), typed("1")))
            .record(transition(two, typed("1"), typed("12")));

        assert_eq!(history.len(), 2);
        assert_eq!(history.display_path(), vec!["", "1", "12"]);
        assert_eq!(history.inputs(), vec![one, two]);
    }

    #[test]
    fn retain_last_drops_oldest_entries() {
        let mut history = InputHistory::new();
        for digit in 1..=5 {
            let token = Token::digit(digit).unwrap();
            history = history.record(transition(
                token,
                EngineState::default(),
                typed(token.glyph()),
            ));
        }

        let history = history.retain_last(2);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.inputs(),
            vec![Token::digit(4).unwrap(), Token::digit(5).unwrap()]
        );
    }

    #[test]
    fn retain_last_zero_empties_history() {
        let history = InputHistory::new()
            .record(transition(
                Token::Clear,
                EngineState::default(),
                EngineState::default(),
            ))
            .retain_last(0);
        assert!(history.is_empty());
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = InputHistory::new().record(transition(
            Token::Clear,
            EngineState::default(),
            EngineState::default(),
        ));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn changed_state_detects_no_ops() {
        let noop = transition(
            Token::Equals,
            EngineState::default(),
            EngineState::default(),
        );
        assert!(!noop.changed_state());

        let op = Token::Operator(Operator::Add);
        let pending = EngineState {
            display_text: "3".to_string(),
            accumulator: 3.0,
            pending_operator: Some(Operator::Add),
            is_typing_number: false,
        };
        assert!(transition(op, typed("3"), pending).changed_state());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = InputHistory::new().record(transition(
            Token::digit(9).unwrap(),
            EngineState::default(),
            typed("9"),
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: InputHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.display_path(), vec!["", "9"]);
    }
}
