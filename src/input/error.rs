//! Input adapter errors.

use crate::core::InvalidDigit;
use thiserror::Error;

/// Errors that can occur when translating raw input into commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    #[error(transparent)]
    InvalidDigit(#[from] InvalidDigit),
}
