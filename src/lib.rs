//! Abacus: a four-function calculator core.
//!
//! Abacus is the logic behind a pocket-calculator keypad. A presentation
//! layer feeds it one [`Token`] per button press and renders
//! [`CalculatorEngine::display_text`] after each one. Everything else, from
//! layout to colors, is left to the caller.
//!
//! # Core Concepts
//!
//! - **Tokens**: the closed set of keys, each with a display glyph
//! - **State**: display text, accumulator, pending operator and typing flag
//! - **History**: an audit trail of handled keys
//! - **Checkpoints**: serializable snapshots for carrying a session across restarts
//!
//! Operators resolve eagerly from left to right, without precedence, and
//! keys that cannot apply are silently ignored.
//!
//! # Example
//!
//! ```rust
//! use abacus::{CalculatorEngine, Token};
//!
//! let mut engine = CalculatorEngine::new();
//! for key in ["3", "+", "4", "+", "5", "="] {
//!     engine.handle_input(key.parse::<Token>().unwrap());
//! }
//! assert_eq!(engine.display_text(), "12");
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod keypad;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::EngineConfig;
pub use crate::core::{EngineState, Phase, State};
pub use engine::CalculatorEngine;
pub use keypad::{Digit, Operator, Token};
