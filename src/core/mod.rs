//! Core calculator types and logic.
//!
//! This module contains the pure value types the engine is assembled from:
//! - `Readout` for the displayed numeral, with `parse_numeral`/`format_number`
//! - `Phase` for the pending binary operation
//! - `Operator` and its arithmetic
//! - `HistoryLog` for the bounded computation log
//!
//! Nothing here logs or calls out; the engine owns all mutation.

mod digit;
mod history;
mod number;
mod operator;
mod readout;
mod state;

pub use digit::{Digit, InvalidDigit};
pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_LIMIT};
pub use number::{format_number, parse_numeral};
pub use operator::{Operator, UnknownOperator};
pub use readout::Readout;
pub use state::Phase;
