//! Bounded log of completed computations.
//!
//! The log keeps the most recent entries first and silently drops the oldest
//! entry once its limit is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use uuid::Uuid;

/// Number of entries kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_HISTORY_LIMIT) {
    Some(limit) => limit,
    None => panic!("default history limit must be non-zero"),
};

/// Record of a single completed computation or unary function.
///
/// Entries are immutable values. The id is unique per entry and stays stable
/// while the entry moves down the log, so views can use it as a list key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier of this entry
    pub id: Uuid,
    /// Formatted computation, e.g. `5 + 5 = 10`
    pub text: String,
    /// When the computation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Most-recent-first log holding at most `limit` entries.
///
/// # Example
///
/// ```rust
/// use abacus::core::HistoryLog;
/// use std::num::NonZeroUsize;
///
/// let mut history = HistoryLog::with_limit(NonZeroUsize::new(2).unwrap());
/// history.record("1 + 1 = 2");
/// history.record("2 × 3 = 6");
/// history.record("√9 = 3");
///
/// assert_eq!(history.texts(), vec!["√9 = 3", "2 × 3 = 6"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    limit: NonZeroUsize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log holding [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Create an empty log holding at most `limit` entries.
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.get()),
            limit,
        }
    }

    /// Prepend an entry, dropping the oldest one beyond the limit.
    pub fn record(&mut self, text: impl Into<String>) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(text));
        self.entries.truncate(self.limit.get());
        &self.entries[0]
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Entry texts, most recent first.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit.get()
    }
}
