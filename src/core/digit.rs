//! Validated decimal digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, 0 through 9.
///
/// # Example
///
/// ```rust
/// use abacus::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert!(Digit::try_from(10u8).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

/// Returned when a value is not a decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a decimal digit")]
pub struct InvalidDigit(pub String);

impl Digit {
    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Character of the digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit(value.to_string()))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| InvalidDigit(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_decimal_digits() {
        for value in 0..=9u8 {
            let digit = Digit::try_from(value).unwrap();
            assert_eq!(digit.value(), value);
            assert_eq!(Digit::try_from(digit.as_char()), Ok(digit));
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(Digit::try_from(10u8), Err(InvalidDigit("10".to_string())));
        assert_eq!(Digit::try_from('a'), Err(InvalidDigit("a".to_string())));
        assert!(Digit::try_from('٣').is_err());
    }

    #[test]
    fn deserialization_validates_range() {
        let digit: Digit = serde_json::from_str("4").unwrap();
        assert_eq!(digit.value(), 4);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
