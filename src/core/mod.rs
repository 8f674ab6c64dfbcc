//! Core calculator types and logic.
//!
//! This module contains the pure part of the calculator:
//! - The `State` trait and the `EngineState` it describes
//! - Input history tracking
//! - Display formatting
//!
//! Nothing in here mutates shared state; the engine owns the one mutable
//! `EngineState` and drives it through these pieces.

mod format;
mod history;
mod state;

pub use format::{
    format_number, is_special_symbol, DEFAULT_MAX_FRACTION_DIGITS, NEGATIVE_INFINITY,
    NOT_A_NUMBER, POSITIVE_INFINITY,
};
pub use history::{InputHistory, InputTransition};
pub use state::{EngineState, Phase, State};
