//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::core::{HistoryLog, DEFAULT_HISTORY_LIMIT};
use crate::engine::{Calculator, Observer, Snapshot};
use std::num::NonZeroUsize;

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder {
    history_limit: usize,
    memory: f64,
    observer: Option<Observer>,
}

impl CalculatorBuilder {
    /// Create a new builder with the default history limit and empty memory.
    pub fn new() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            memory: 0.0,
            observer: None,
        }
    }

    /// Set how many history entries are kept.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the initial memory register.
    pub fn memory(mut self, value: f64) -> Self {
        self.memory = value;
        self
    }

    /// Register a callback receiving a snapshot after every command.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the calculator.
    /// Returns an error if a setting is out of range.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let limit = check_history_limit(self.history_limit)?;
        let memory = check_memory(self.memory)?;

        Ok(Calculator::with_parts(
            HistoryLog::with_limit(limit),
            memory,
            self.observer,
        ))
    }
}

/// A history log must keep at least one entry.
pub(crate) fn check_history_limit(limit: usize) -> Result<NonZeroUsize, BuildError> {
    NonZeroUsize::new(limit).ok_or(BuildError::ZeroHistoryLimit)
}

pub(crate) fn check_memory(value: f64) -> Result<f64, BuildError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BuildError::NonFiniteMemory(value))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
