//! The calculator engine.
//!
//! [`CalculatorEngine`] owns the one mutable [`EngineState`] and changes it
//! in response to key presses. Operators resolve eagerly from left to right:
//! choosing a new operator while a second operand is being typed first applies
//! the pending one, so `3 + 4 + 5 =` shows `12`. There is no precedence.
//!
//! Input that cannot apply (percent on an empty display, equals with nothing
//! pending) is ignored rather than reported.

use crate::checkpoint::{Checkpoint, CheckpointError, SessionMetadata};
use crate::config::{ConfigError, EngineConfig};
use crate::core::{format_number, EngineState, InputHistory, InputTransition, Phase, State};
use crate::keypad::{Digit, Operator, Token};
use chrono::Utc;
use tracing::{debug, info, trace};

/// Input-driven calculator state machine.
///
/// # Example
///
/// ```rust
/// use abacus::engine::CalculatorEngine;
/// use abacus::keypad::{Operator, Token};
///
/// let mut engine = CalculatorEngine::new();
/// engine.feed([
///     Token::digit(6).unwrap(),
///     Token::Operator(Operator::Divide),
///     Token::digit(3).unwrap(),
///     Token::Equals,
/// ]);
/// assert_eq!(engine.display_text(), "2");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    state: EngineState,
    config: EngineConfig,
    history: InputHistory,
    metadata: SessionMetadata,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine in the initial state with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(
            EngineState::default(),
            EngineConfig::default(),
            InputHistory::new(),
            SessionMetadata::default(),
        )
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            EngineState::default(),
            config,
            InputHistory::new(),
            SessionMetadata::default(),
        ))
    }

    /// Rebuild an engine from a checkpoint after validating it.
    ///
    /// The restored history is cut down to the configured capacity.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(
            checkpoint = %checkpoint.id,
            phase = checkpoint.state.name(),
            inputs = checkpoint.metadata.inputs_handled,
            "resumed calculator session"
        );
        let history = checkpoint
            .history
            .retain_last(checkpoint.config.history_capacity);
        Ok(Self::from_parts(
            checkpoint.state,
            checkpoint.config,
            history,
            checkpoint.metadata,
        ))
    }

    fn from_parts(
        state: EngineState,
        config: EngineConfig,
        history: InputHistory,
        metadata: SessionMetadata,
    ) -> Self {
        Self {
            state,
            config,
            history,
            metadata,
        }
    }

    /// Snapshot the session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(
            self.state.clone(),
            self.config.clone(),
            self.history.clone(),
            self.metadata.clone(),
        )
    }

    /// Handle a single key press.
    pub fn handle_input(&mut self, token: Token) {
        let previous = self.state.clone();

        let applied = match token {
            Token::Clear => self.clear(),
            Token::PlusMinus => self.transform_display(|value| -value),
            Token::Percent => self.transform_display(|value| value / 100.0),
            Token::Operator(operator) => self.select_operator(operator),
            Token::Digit(digit) => self.append_digit(digit),
            Token::Decimal => self.add_decimal_point(),
            Token::Equals => self.perform_calculation(),
        };

        if applied {
            trace!(
                input = %token,
                phase = self.state.name(),
                display = %self.state.display_text,
                "input handled"
            );
        } else {
            debug!(
                input = %token,
                display = %self.state.display_text,
                "input ignored"
            );
        }

        self.track(token, previous, applied);
    }

    /// Handle a sequence of key presses in order.
    pub fn feed<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.handle_input(token);
        }
    }

    pub fn display_text(&self) -> &str {
        &self.state.display_text
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn accumulator(&self) -> f64 {
        self.state.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    pub fn is_typing_number(&self) -> bool {
        self.state.is_typing_number
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn clear(&mut self) -> bool {
        self.state = EngineState::default();
        true
    }

    /// Sign toggle and percent. A display that is not a number is left alone.
    fn transform_display(&mut self, transform: impl FnOnce(f64) -> f64) -> bool {
        let Some(value) = self.state.display_value() else {
            return false;
        };

        self.state.display_text = self.format(transform(value));
        true
    }

    fn select_operator(&mut self, operator: Operator) -> bool {
        if self.state.is_typing_number {
            self.perform_calculation();
        }

        self.state.pending_operator = Some(operator);
        self.state.accumulator = self.state.display_value().unwrap_or(0.0);
        self.state.is_typing_number = false;
        true
    }

    fn append_digit(&mut self, digit: Digit) -> bool {
        if !self.state.is_typing_number {
            self.state.display_text.clear();
        }

        self.state.display_text.push_str(digit.glyph());
        self.state.is_typing_number = true;
        true
    }

    fn add_decimal_point(&mut self) -> bool {
        if !self.state.is_typing_number {
            self.state.display_text = "0.".to_string();
            self.state.is_typing_number = true;
            true
        } else if !self.state.display_text.contains('.') {
            self.state.display_text.push('.');
            true
        } else {
            false
        }
    }

    /// Resolve the pending operator against the displayed operand.
    fn perform_calculation(&mut self) -> bool {
        let (Some(operator), Some(operand)) =
            (self.state.pending_operator, self.state.display_value())
        else {
            return false;
        };

        let result = operator.apply(self.state.accumulator, operand);
        debug!(
            lhs = self.state.accumulator,
            operator = operator.glyph(),
            rhs = operand,
            result,
            "resolved pending operation"
        );

        self.state.accumulator = result;
        self.state.display_text = self.format(result);
        self.state.pending_operator = None;
        self.state.is_typing_number = false;
        true
    }

    fn format(&self, value: f64) -> String {
        format_number(value, self.config.max_fraction_digits)
    }

    fn track(&mut self, input: Token, previous: EngineState, applied: bool) {
        let now = Utc::now();
        self.metadata.updated_at = now;
        self.metadata.inputs_handled += 1;
        if !applied {
            self.metadata.inputs_ignored += 1;
        }

        if self.config.records_history() {
            let transition = InputTransition {
                input,
                from: previous,
                to: self.state.clone(),
                timestamp: now,
            };
            self.history = std::mem::take(&mut self.history)
                .record(transition)
                .retain_last(self.config.history_capacity);
        }
    }
}
