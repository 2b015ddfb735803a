//! Calculator engine that applies commands to its owned state.

use crate::core::{format_number, Digit, HistoryLog, Operator, Phase, Readout};
use crate::engine::snapshot::{Observer, Snapshot};
use crate::input::Command;
use tracing::{debug, trace};

/// Calculator engine.
///
/// Owns the readout, the pending-operation phase, the memory register and the
/// history log. Every operation runs to completion and never fails; degenerate
/// results are shown rather than rejected.
pub struct Calculator {
    readout: Readout,
    phase: Phase,
    memory: f64,
    history: HistoryLog,
    observer: Option<Observer>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing `0` with empty memory and history.
    pub fn new() -> Self {
        Self::with_parts(HistoryLog::new(), 0.0, None)
    }

    pub(crate) fn with_parts(history: HistoryLog, memory: f64, observer: Option<Observer>) -> Self {
        Self {
            readout: Readout::new(),
            phase: Phase::Idle,
            memory,
            history,
            observer,
        }
    }

    /// Get readout text (pure)
    pub fn display(&self) -> &str {
        self.readout.as_str()
    }

    /// Get pending-operation phase (pure)
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Get memory register (pure)
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Memory holds a non-zero value. NaN counts as non-zero.
    pub fn memory_active(&self) -> bool {
        self.memory != 0.0
    }

    /// Get history log (pure)
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// `"<operand> <operator>"` while an operation is pending.
    pub fn pending_summary(&self) -> Option<String> {
        self.phase
            .pending()
            .map(|(operand, operator)| format!("{} {}", format_number(operand), operator))
    }

    /// Capture the current view state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.readout.to_string(),
            pending: self.pending_summary(),
            memory_active: self.memory_active(),
            history: self.history.entries().cloned().collect(),
        }
    }

    /// Apply one command.
    ///
    /// Each operation notifies the observer once it has run, whether it is
    /// reached through here or called directly.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Digit(digit) => self.input_digit(digit),
            Command::DecimalPoint => self.input_decimal_point(),
            Command::Operation(op) => self.perform_operation(op),
            Command::Clear => self.clear(),
            Command::Backspace => self.backspace(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percentage => self.percentage(),
            Command::SquareRoot => self.square_root(),
            Command::Square => self.square(),
            Command::Reciprocal => self.reciprocal(),
            Command::MemoryStore => self.memory_store(),
            Command::MemoryRecall => self.memory_recall(),
            Command::MemoryClear => self.memory_clear(),
            Command::MemoryAdd => self.memory_add(),
        }
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(&self.snapshot());
        }
    }

    /// Enter a digit, starting a fresh number right after an operator.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.phase.is_awaiting_operand() {
            self.readout = Readout::from_digit(digit);
            self.phase = self.phase.operand_started();
        } else {
            self.readout.push_digit(digit);
        }
        trace!(display = %self.readout, "digit entered");
        self.notify();
    }

    /// Enter a decimal point. Ignored when the readout already has one.
    pub fn input_decimal_point(&mut self) {
        if self.phase.is_awaiting_operand() {
            self.readout = Readout::fresh_fraction();
            self.phase = self.phase.operand_started();
            trace!(display = %self.readout, "decimal point entered");
        } else if self.readout.push_point() {
            trace!(display = %self.readout, "decimal point entered");
        } else {
            trace!(display = %self.readout, "decimal point ignored");
        }
        self.notify();
    }

    /// Reset the readout and drop any pending operation.
    ///
    /// Memory and history are kept.
    pub fn clear(&mut self) {
        debug!(phase = self.phase.name(), "cleared");
        self.readout = Readout::new();
        self.phase = Phase::Idle;
        self.notify();
    }

    /// Remove the last entered character. No-op right after an operator.
    pub fn backspace(&mut self) {
        if !self.phase.is_awaiting_operand() {
            self.readout.pop();
        }
        self.notify();
    }

    pub fn toggle_sign(&mut self) {
        self.readout = Readout::from_value(-self.readout.value());
        self.notify();
    }

    pub fn percentage(&mut self) {
        self.readout = Readout::from_value(self.readout.value() / 100.0);
        self.notify();
    }

    /// Replace the readout with its square root.
    ///
    /// A negative readout yields NaN, shown and recorded as-is.
    pub fn square_root(&mut self) {
        self.apply_unary(|value| value.sqrt(), |old, new| format!("√{old} = {new}"));
    }

    pub fn square(&mut self) {
        self.apply_unary(|value| value * value, |old, new| format!("{old}² = {new}"));
    }

    /// Replace the readout with its reciprocal.
    ///
    /// A zero readout yields Infinity, shown and recorded as-is.
    pub fn reciprocal(&mut self) {
        self.apply_unary(|value| 1.0 / value, |old, new| format!("1/{old} = {new}"));
    }

    fn apply_unary<F, L>(&mut self, function: F, label: L)
    where
        F: FnOnce(f64) -> f64,
        L: FnOnce(&str, &str) -> String,
    {
        let result = Readout::from_value(function(self.readout.value()));
        let entry = label(self.readout.as_str(), result.as_str());
        debug!(entry = %entry, "unary function applied");
        self.history.record(entry);
        self.readout = result;
        self.notify();
    }

    pub fn memory_store(&mut self) {
        self.memory = self.readout.value();
        debug!(memory = self.memory, "memory stored");
        self.notify();
    }

    /// Show the memory register. A pending operation stays pending.
    pub fn memory_recall(&mut self) {
        self.readout = Readout::from_value(self.memory);
        self.notify();
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        debug!("memory cleared");
        self.notify();
    }

    pub fn memory_add(&mut self) {
        self.memory += self.readout.value();
        debug!(memory = self.memory, "memory added");
        self.notify();
    }

    /// Press an operator key.
    ///
    /// While idle this captures the readout as the left-hand operand. With an
    /// operation already pending it first applies that operation to the
    /// pending operand and the readout, records the computation, and shows the
    /// result, which then becomes the operand for `op`. Pressing operators
    /// back to back reuses the readout as the right-hand operand.
    pub fn perform_operation(&mut self, op: Operator) {
        let input = self.readout.value();
        let from = self.phase.name();

        let operand = match self.phase.pending() {
            None => input,
            Some((operand, operator)) => {
                let result = operator.apply(operand, input);
                if operator == Operator::Divide && input == 0.0 {
                    debug!(operand, "division by zero, result defined as 0");
                }

                let entry = format!(
                    "{} {} {} = {}",
                    format_number(operand),
                    operator,
                    format_number(input),
                    format_number(result)
                );
                debug!(operand, operator = %operator, input, result, "pending operation applied");
                self.history.record(entry);
                self.readout = Readout::from_value(result);
                result
            }
        };

        self.phase = Phase::Pending {
            operand,
            operator: op,
            awaiting_operand: true,
        };
        debug!(from, to = self.phase.name(), operator = %op, "operator pressed");
        self.notify();
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("readout", &self.readout)
            .field("phase", &self.phase)
            .field("memory", &self.memory)
            .field("history", &self.history)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
