//! Read-only view of the calculator.

use crate::core::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Everything a view needs to render the calculator.
///
/// Snapshots are plain values: holding one never borrows the engine, and the
/// engine cannot be mutated through one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Readout text
    pub display: String,
    /// `"<operand> <operator>"` while an operation is pending
    pub pending: Option<String>,
    /// Memory holds a non-zero value
    pub memory_active: bool,
    /// History entries, most recent first. Entry ids are stable list keys.
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Serialize for a web view.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Callback invoked with a fresh snapshot after every command.
pub type Observer = Box<dyn Fn(&Snapshot) + Send + Sync>;
