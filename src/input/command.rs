//! Commands accepted by the calculator engine and the key map producing them.

use crate::core::{Digit, Operator};
use crate::input::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One discrete input to the calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    Digit(Digit),
    DecimalPoint,
    Operation(Operator),
    Clear,
    Backspace,
    ToggleSign,
    Percentage,
    SquareRoot,
    Square,
    Reciprocal,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    MemoryAdd,
}

impl Command {
    /// Translate a keyboard key name or keypad button label.
    ///
    /// Keyboard names follow the browser `KeyboardEvent.key` values
    /// (`Enter`, `Escape`, `Backspace`, `*`, `/`); button labels are the
    /// symbols printed on the keypad (`×`, `÷`, `MS`, `√`, `x²`, ...).
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::Operator;
    /// use abacus::input::Command;
    ///
    /// assert_eq!(Command::from_key("Enter"), Ok(Command::Operation(Operator::Equals)));
    /// assert_eq!(Command::from_key("M+"), Ok(Command::MemoryAdd));
    /// assert!(Command::from_key("Tab").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, InputError> {
        let command = match key {
            "." => Self::DecimalPoint,
            "Enter" => Self::Operation(Operator::Equals),
            "Escape" | "c" | "C" => Self::Clear,
            "Backspace" | "⌫" => Self::Backspace,
            "±" => Self::ToggleSign,
            "%" => Self::Percentage,
            "√" => Self::SquareRoot,
            "x²" => Self::Square,
            "1/x" => Self::Reciprocal,
            "MS" => Self::MemoryStore,
            "MR" => Self::MemoryRecall,
            "MC" => Self::MemoryClear,
            "M+" => Self::MemoryAdd,
            _ => return Self::from_symbol(key),
        };
        Ok(command)
    }

    fn from_symbol(key: &str) -> Result<Self, InputError> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Ok(Self::Digit(Digit::try_from(c)?)),
            (Some(_), _) => key
                .parse::<Operator>()
                .map(Self::Operation)
                .map_err(|_| InputError::UnknownKey(key.to_string())),
            (None, _) => Err(InputError::UnknownKey(String::new())),
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operation(op) => write!(f, "{op}"),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("⌫"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percentage => f.write_str("%"),
            Self::SquareRoot => f.write_str("√"),
            Self::Square => f.write_str("x²"),
            Self::Reciprocal => f.write_str("1/x"),
            Self::MemoryStore => f.write_str("MS"),
            Self::MemoryRecall => f.write_str("MR"),
            Self::MemoryClear => f.write_str("MC"),
            Self::MemoryAdd => f.write_str("M+"),
        }
    }
}
