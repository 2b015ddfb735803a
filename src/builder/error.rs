//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("Initial memory must be a finite number, got {0}")]
    NonFiniteMemory(f64),
}
