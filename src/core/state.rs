//! Pending-operation state of the calculator.
//!
//! The calculator is always in one of two phases: idle, or holding a left-hand
//! operand and an operator waiting to be applied. Whether the readout should be
//! replaced by the next digit is part of the pending phase, so an operator can
//! never exist without its operand.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Phase of the binary-operation state machine.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Operator, Phase};
///
/// let phase = Phase::Pending {
///     operand: 5.0,
///     operator: Operator::Add,
///     awaiting_operand: true,
/// };
///
/// assert_eq!(phase.name(), "Pending");
/// assert_eq!(phase.pending(), Some((5.0, Operator::Add)));
/// assert!(phase.is_awaiting_operand());
/// assert!(!Phase::Idle.is_awaiting_operand());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No operation in progress.
    #[default]
    Idle,

    /// An operator was pressed and is waiting for its right-hand operand.
    Pending {
        /// Left-hand operand captured when the operator was pressed
        operand: f64,
        /// Operator to apply once the right-hand operand is complete
        operator: Operator,
        /// Next digit starts a fresh number instead of extending the readout
        awaiting_operand: bool,
    },
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending { .. } => "Pending",
        }
    }

    /// Operand and operator of the pending operation, if any.
    pub fn pending(&self) -> Option<(f64, Operator)> {
        match *self {
            Self::Idle => None,
            Self::Pending {
                operand, operator, ..
            } => Some((operand, operator)),
        }
    }

    /// Check if the next digit should start a fresh number.
    pub fn is_awaiting_operand(&self) -> bool {
        matches!(
            self,
            Self::Pending {
                awaiting_operand: true,
                ..
            }
        )
    }

    /// Mark the right-hand operand as started.
    ///
    /// Has no effect while idle.
    pub fn operand_started(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Pending {
                operand, operator, ..
            } => Self::Pending {
                operand,
                operator,
                awaiting_operand: false,
            },
        }
    }
}
