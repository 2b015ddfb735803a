//! The numeral currently shown on the calculator.

use super::digit::Digit;
use super::number::{format_number, parse_numeral};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text of the calculator display.
///
/// Entry keeps the readout a valid partial or complete numeral: a lone `0` is
/// replaced rather than prefixed, and at most one decimal point is accepted.
/// Computed values are written with [`format_number`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Readout};
///
/// let mut readout = Readout::new();
/// readout.push_digit(Digit::try_from(4u8).unwrap());
/// readout.push_point();
/// readout.push_point();
/// readout.push_digit(Digit::try_from(2u8).unwrap());
///
/// assert_eq!(readout.as_str(), "4.2");
/// assert_eq!(readout.value(), 4.2);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Readout(String);

impl Default for Readout {
    fn default() -> Self {
        Self::new()
    }
}

impl Readout {
    /// Create a readout showing `0`.
    pub fn new() -> Self {
        Self("0".to_string())
    }

    /// Create a readout showing a computed value.
    pub fn from_value(value: f64) -> Self {
        Self(format_number(value))
    }

    /// Create a readout holding a single digit.
    pub fn from_digit(digit: Digit) -> Self {
        Self(digit.to_string())
    }

    /// Create a readout for a fresh fractional entry, `0.`.
    pub fn fresh_fraction() -> Self {
        Self("0.".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the readout text.
    pub fn value(&self) -> f64 {
        parse_numeral(&self.0)
    }

    pub fn has_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Append a digit, replacing a lone `0`.
    pub fn push_digit(&mut self, digit: Digit) {
        if self.0 == "0" {
            self.0.clear();
        }
        self.0.push(digit.as_char());
    }

    /// Append a decimal point unless one is already present.
    ///
    /// Returns whether the point was appended.
    pub fn push_point(&mut self) -> bool {
        if self.has_point() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Remove the last character, falling back to `0` when nothing remains.
    pub fn pop(&mut self) {
        self.0.pop();
        if self.0.is_empty() {
            self.0.push('0');
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
