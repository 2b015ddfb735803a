//! Input adapter: raw key names and button labels to engine commands.
//!
//! Any event source (terminal, browser keydown, keypad clicks) reduces its
//! events to key names and feeds them through [`Command::from_key`]. The
//! engine only ever sees validated [`Command`] values.

mod command;
mod error;

pub use command::Command;
pub use error::InputError;
