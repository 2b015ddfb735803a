//! Abacus: a keypad calculator engine
//!
//! Abacus models a pocket calculator as a small explicit state machine.
//! The core types are pure values; the engine owns them and applies one
//! command at a time, and views read the result through snapshots.
//!
//! # Core Concepts
//!
//! - **Readout**: the numeral on the display, edited digit by digit
//! - **Phase**: idle, or an operand and operator waiting for the next number
//! - **Memory**: a single register independent of the computation
//! - **History**: the last computations, most recent first
//!
//! Operator keys double as "apply" and "prepare next": pressing one while an
//! operation is pending computes it and chains the result into the next.
//!
//! # Example
//!
//! ```rust
//! use abacus::engine::Calculator;
//! use abacus::input::Command;
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "÷", "0", "="] {
//!     calc.execute(Command::from_key(key).unwrap());
//! }
//!
//! // Division by zero is defined as 0
//! assert_eq!(calc.display(), "0");
//! assert_eq!(calc.history().texts(), vec!["5 ÷ 0 = 0"]);
//!
//! for key in ["9", "x²"] {
//!     calc.execute(Command::from_key(key).unwrap());
//! }
//! assert_eq!(calc.display(), "81");
//! assert_eq!(calc.snapshot().history[0].text, "9² = 81");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod input;

// Re-export commonly used types
pub use crate::builder::{BuildError, CalculatorBuilder};
pub use crate::core::{Digit, HistoryLog, Operator, Phase, Readout};
pub use crate::engine::{Calculator, Snapshot};
pub use crate::input::{Command, InputError};
