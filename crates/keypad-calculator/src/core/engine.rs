//! Calculator engine: a deterministic state machine over [`CalculatorState`]
//!
//! ```text
//! Idle --digit/decimal--> Idle
//! Idle --operator-------> PendingOp   (stores first operand)
//! PendingOp --digit-----> PendingOp   (first digit overwrites)
//! PendingOp --operator--> PendingOp   (folds the pending pair)
//! PendingOp --evaluate--> Idle
//! any --clear-----------> Idle
//! ```
//!
//! Evaluation is strictly left to right; there is no operator precedence.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::number::{format_number, parse_number};
use super::{Digit, Operator};

/// Complete state of one calculator instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown or being typed
    pub display: String,
    /// Left-hand operand of the operation in progress
    pub pending_operand: Option<String>,
    /// Operator of the operation in progress
    pub pending_operator: Option<Operator>,
    /// Next digit starts a new number instead of appending
    pub awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Initial display text
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates the initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }

    /// Coarse state-machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending_operator.is_some() {
            Phase::PendingOp
        } else {
            Phase::Idle
        }
    }
}

/// Phase of the calculator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No operation pending
    Idle,
    /// Operator chosen, waiting for the second operand
    PendingOp,
}

/// The calculator engine
///
/// Owns its state exclusively; every command takes `&mut self`, runs to
/// completion and never fails.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates a calculator showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Full state snapshot
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
        self.log_transition("clear");
    }

    /// Types a digit
    ///
    /// A lone `"0"` is replaced rather than extended, so `0, 5` shows `"5"`.
    pub fn input_digit(&mut self, digit: Digit) {
        let state = &mut self.state;
        if state.awaiting_fresh_entry {
            state.display = digit.to_string();
            state.awaiting_fresh_entry = false;
        } else if state.display == CalculatorState::INITIAL_DISPLAY {
            state.display = digit.to_string();
        } else {
            state.display.push(digit.as_char());
        }
        self.log_transition("digit");
    }

    /// Types a decimal point; a second point in the same number is ignored
    pub fn input_decimal(&mut self) {
        let state = &mut self.state;
        if state.awaiting_fresh_entry {
            state.display = "0.".to_string();
            state.awaiting_fresh_entry = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
        self.log_transition("decimal");
    }

    /// Selects an operator
    ///
    /// The first operator stores the display verbatim as the left operand.
    /// Later operators fold the pending operation into a running result
    /// before arming the new one.
    pub fn perform_operation(&mut self, op: Operator) {
        let input_value = parse_number(&self.state.display);

        match (&self.state.pending_operand, self.state.pending_operator) {
            (None, _) => {
                self.state.pending_operand = Some(self.state.display.clone());
            }
            (Some(operand), Some(pending)) => {
                let result = pending.apply(parse_number(operand), input_value);
                let text = self.record_result(result);
                self.state.pending_operand = Some(text);
            }
            (Some(_), None) => {}
        }

        self.state.awaiting_fresh_entry = true;
        self.state.pending_operator = Some(op);
        self.log_transition("operator");
    }

    /// Evaluates the pending operation (`=`)
    ///
    /// Does nothing unless both an operand and an operator are pending.
    pub fn evaluate(&mut self) {
        let (Some(operand), Some(op)) = (&self.state.pending_operand, self.state.pending_operator)
        else {
            self.log_transition("evaluate (no-op)");
            return;
        };

        let result = op.apply(parse_number(operand), parse_number(&self.state.display));
        self.state.pending_operand = None;
        self.state.pending_operator = None;
        self.record_result(result);
        self.state.awaiting_fresh_entry = false;
        self.log_transition("evaluate");
    }

    /// Writes a result to the display and returns its text
    fn record_result(&mut self, result: f64) -> String {
        let text = format_number(result);
        if !result.is_finite() {
            warn!(target: "keypad_calculator::engine", result = %text, "non-finite result");
        }
        self.state.display.clone_from(&text);
        text
    }

    fn log_transition(&self, command: &str) {
        debug!(
            target: "keypad_calculator::engine",
            command,
            display = %self.state.display,
            phase = ?self.state.phase(),
            "transition"
        );
    }
}
