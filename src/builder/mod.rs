//! Builder API for configuring calculators.
//!
//! This module provides a fluent builder for creating calculators with a
//! custom history limit, a preloaded memory register or a view observer.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;

use crate::engine::Calculator;

/// Create a calculator keeping `limit` history entries.
///
/// # Example
///
/// ```
/// use abacus::builder::with_history_limit;
///
/// let calc = with_history_limit(3).unwrap();
/// assert_eq!(calc.history().limit(), 3);
/// assert!(with_history_limit(0).is_err());
/// ```
pub fn with_history_limit(limit: usize) -> Result<Calculator, BuildError> {
    CalculatorBuilder::new().history_limit(limit).build()
}
