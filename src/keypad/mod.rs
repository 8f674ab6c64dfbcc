//! The calculator's input alphabet.
//!
//! Every button press is one [`Token`]. Tokens form a closed set and each
//! carries a fixed glyph, which is what gets echoed into the display for
//! digits and what a presentation layer prints on the button face.

pub mod error;

pub use error::TokenParseError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A decimal digit key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// Digit for a numeric value, `None` above 9.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
        }
    }
}

/// One of the four arithmetic operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Combine the stored left operand with the displayed right operand.
    ///
    /// Plain IEEE 754 arithmetic: dividing by zero yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Divide => lhs / rhs,
            Self::Multiply => lhs * rhs,
            Self::Subtract => lhs - rhs,
            Self::Add => lhs + rhs,
        }
    }
}

/// A single button press.
///
/// # Example
///
/// ```rust
/// use abacus::keypad::{Operator, Token};
///
/// let token: Token = "×".parse().unwrap();
/// assert_eq!(token, Token::Operator(Operator::Multiply));
/// assert_eq!(Token::PlusMinus.glyph(), "+/-");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Token {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Clear,
    PlusMinus,
    Percent,
    Equals,
}

impl Token {
    /// Every key on the pad.
    pub const ALL: [Token; 19] = [
        Token::Clear,
        Token::PlusMinus,
        Token::Percent,
        Token::Operator(Operator::Divide),
        Token::Operator(Operator::Multiply),
        Token::Operator(Operator::Subtract),
        Token::Operator(Operator::Add),
        Token::Digit(Digit::Zero),
        Token::Digit(Digit::One),
        Token::Digit(Digit::Two),
        Token::Digit(Digit::Three),
        Token::Digit(Digit::Four),
        Token::Digit(Digit::Five),
        Token::Digit(Digit::Six),
        Token::Digit(Digit::Seven),
        Token::Digit(Digit::Eight),
        Token::Digit(Digit::Nine),
        Token::Decimal,
        Token::Equals,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Digit(digit) => digit.glyph(),
            Self::Operator(op) => op.glyph(),
            Self::Decimal => ".",
            Self::Clear => "AC",
            Self::PlusMinus => "+/-",
            Self::Percent => "%",
            Self::Equals => "=",
        }
    }

    pub fn digit(value: u8) -> Option<Self> {
        Digit::from_value(value).map(Self::Digit)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Token {
    type Err = TokenParseError;

    /// Parse a glyph, or one of the ASCII spellings people type instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Err(TokenParseError::Empty);
        }

        if let Some(token) = Self::ALL.iter().find(|t| t.glyph() == key) {
            return Ok(*token);
        }

        match key {
            "*" | "x" => Ok(Self::Operator(Operator::Multiply)),
            "/" => Ok(Self::Operator(Operator::Divide)),
            "C" | "c" | "ac" => Ok(Self::Clear),
            "±" => Ok(Self::PlusMinus),
            _ => Err(TokenParseError::Unknown(key.to_string())),
        }
    }
}
