//! Binary operators and their arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator selected on the keypad.
///
/// `Equals` is an operator like the others: applying it yields the right-hand
/// operand unchanged, which finalizes a pending computation without starting
/// a new one.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
/// assert_eq!(Operator::Equals.apply(5.0, 3.0), 3.0);
/// assert_eq!("÷".parse::<Operator>(), Ok(Operator::Divide));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// Symbol shown on the keypad and written to history.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by zero yields 0 rather than an infinity.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs != 0.0 {
                    lhs / rhs
                } else {
                    0.0
                }
            }
            Self::Equals => rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when text names no operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "=" => Ok(Self::Equals),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}
