//! The calculator engine: the imperative shell around the pure core.
//!
//! [`Calculator`] owns all mutable state and is driven one [`Command`] at a
//! time. Views read it through [`Snapshot`] values, either on demand or
//! pushed to an [`Observer`] after every command.
//!
//! [`Command`]: crate::input::Command

mod calculator;
mod snapshot;

pub use calculator::Calculator;
pub use snapshot::{Observer, Snapshot};
