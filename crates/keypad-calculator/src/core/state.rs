//! The immediate-mode calculator state machine.
//!
//! Four fields drive everything: the display string, the operand captured
//! before an operator was pressed, the pending operation, and the
//! waiting-for-operand flag. Every button press is one synchronous
//! transition over that tuple; there is no other state anywhere.

use serde::{Deserialize, Serialize};

use super::format::format_number;
use super::operations::{calculate, Operation};

/// Calculator state: the display plus pending-computation bookkeeping.
///
/// Invariants:
/// - `display` parses to an `f64` (special values included) whenever an
///   operation consumes it.
/// - `display` holds at most one decimal point.
/// - `operation` is `None` exactly when no operator has been pressed since
///   the last clear or settled equals.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    previous_value: Option<f64>,
    operation: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `"0"`, nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }

    /// The raw display string, untruncated.
    ///
    /// See [`format_display`](super::format::format_display) for the
    /// presentation transform applied when rendering.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operand captured before the pending operation, if any.
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// The pending operation, if an operator has been pressed.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// True when the next digit starts a fresh operand.
    #[must_use]
    pub fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Enters a digit (0-9). Out-of-range values are ignored.
    ///
    /// Starts a fresh operand after an operator press; otherwise appends,
    /// except that a bare `"0"` is replaced rather than extended.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.waiting_for_operand {
            self.display.clear();
            self.display.push(ch);
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Enters the decimal point.
    ///
    /// Idempotent: a display already holding one is left untouched. After an
    /// operator press the fresh operand starts as `"0."`.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// AC: resets all four fields to their initial values.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// ±: flips the sign of the displayed value. No-op on `"0"`.
    pub fn toggle_sign(&mut self) {
        if self.display != "0" {
            if let Some(stripped) = self.display.strip_prefix('-') {
                self.display = stripped.to_string();
            } else {
                self.display.insert(0, '-');
            }
        }
    }

    /// %: replaces the display with the current value divided by 100.
    pub fn percentage(&mut self) {
        let value = self.current_operand() / 100.0;
        self.display = format_number(value);
    }

    /// Operator press.
    ///
    /// Captures the current operand, folds it into any pending computation,
    /// and rebinds the pending operator. When the flag is already set (no
    /// digits since the last operator) nothing is recomputed; the press
    /// merely swaps the pending operator.
    pub fn apply_operation(&mut self, next: Operation) {
        let input = self.current_operand();

        if self.previous_value.is_none() {
            self.previous_value = Some(input);
        } else if let Some(op) = self.operation {
            if !self.waiting_for_operand {
                let value = calculate(self.previous_value.unwrap_or(0.0), input, op);
                self.display = format_number(value);
                self.previous_value = Some(value);
            }
        }

        self.waiting_for_operand = true;
        self.operation = Some(next);
    }

    /// =: settles the pending computation into the display.
    ///
    /// Clears the captured operand and the pending operation so a subsequent
    /// digit starts fresh. No-op unless both are held.
    pub fn equals(&mut self) {
        if let (Some(previous), Some(op)) = (self.previous_value, self.operation) {
            let value = calculate(previous, self.current_operand(), op);
            self.display = format_number(value);
            self.previous_value = None;
            self.operation = None;
            self.waiting_for_operand = true;
        }
    }

    /// Copies the four fields into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            display: self.display.clone(),
            previous_value: self.previous_value,
            operation: self.operation,
            waiting_for_operand: self.waiting_for_operand,
        }
    }

    /// Parses the display as the current operand.
    ///
    /// The input-construction rules keep the display parseable; anything
    /// else surfaces as NaN, exactly as the display would render it.
    fn current_operand(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }
}

/// Serializable view of [`CalculatorState`], for drivers and test fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The visible value.
    pub display: String,
    /// The operand captured before the pending operation.
    pub previous_value: Option<f64>,
    /// The pending binary operation.
    pub operation: Option<Operation>,
    /// Whether the next digit starts a fresh operand.
    pub waiting_for_operand: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(state: &mut CalculatorState, digits: &[u8]) {
        for &d in digits {
            state.input_digit(d);
        }
    }

    // ===== Initial state tests =====

    #[test]
    fn test_new_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.waiting_for_operand());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    // ===== Digit entry tests =====

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_digit_sequence_appends() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[5, 6]);
        assert_eq!(state.display(), "56");
    }

    #[test]
    fn test_zero_on_zero_stays_zero() {
        let mut state = CalculatorState::new();
        state.input_digit(0);
        state.input_digit(0);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut state = CalculatorState::new();
        state.input_digit(10);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let mut state = CalculatorState::new();
        state.input_digit(7);
        state.apply_operation(Operation::Add);
        state.input_digit(3);
        assert_eq!(state.display(), "3");
        assert!(!state.waiting_for_operand());
    }

    // ===== Decimal entry tests =====

    #[test]
    fn test_decimal_appends_once() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.input_decimal();
        assert_eq!(state.display(), "5.");
    }

    #[test]
    fn test_decimal_is_idempotent() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.input_decimal();
        state.input_decimal();
        assert_eq!(state.display(), "5.");
    }

    #[test]
    fn test_decimal_while_waiting_starts_zero_point() {
        let mut state = CalculatorState::new();
        state.input_digit(7);
        state.apply_operation(Operation::Multiply);
        state.input_decimal();
        assert_eq!(state.display(), "0.");
        assert!(!state.waiting_for_operand());
    }

    #[test]
    fn test_decimal_on_initial_zero() {
        let mut state = CalculatorState::new();
        state.input_decimal();
        assert_eq!(state.display(), "0.");
        state.input_digit(5);
        assert_eq!(state.display(), "0.5");
    }

    // ===== Clear tests =====

    #[test]
    fn test_clear_resets_everything() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[4, 2]);
        state.apply_operation(Operation::Add);
        state.input_digit(1);
        state.clear();
        assert_eq!(state, CalculatorState::new());
    }

    // ===== Sign toggle tests =====

    #[test]
    fn test_toggle_sign_on_zero_is_noop() {
        let mut state = CalculatorState::new();
        state.toggle_sign();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_toggle_sign_negates() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.toggle_sign();
        assert_eq!(state.display(), "-5");
    }

    #[test]
    fn test_toggle_sign_is_involutive() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.toggle_sign();
        state.toggle_sign();
        assert_eq!(state.display(), "5");
    }

    // ===== Percentage tests =====

    #[test]
    fn test_percentage_divides_by_hundred() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[5, 0]);
        state.percentage();
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_percentage_of_zero() {
        let mut state = CalculatorState::new();
        state.percentage();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_percentage_of_negative() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[2, 0, 0]);
        state.toggle_sign();
        state.percentage();
        assert_eq!(state.display(), "-2");
    }

    // ===== Operator tests =====

    #[test]
    fn test_first_operator_captures_operand() {
        let mut state = CalculatorState::new();
        state.input_digit(9);
        state.apply_operation(Operation::Multiply);
        assert_eq!(state.previous_value(), Some(9.0));
        assert_eq!(state.operation(), Some(Operation::Multiply));
        assert!(state.waiting_for_operand());
        assert_eq!(state.display(), "9");
    }

    #[test]
    fn test_second_operator_folds_pending_computation() {
        let mut state = CalculatorState::new();
        state.input_digit(9);
        state.apply_operation(Operation::Multiply);
        state.input_digit(9);
        state.apply_operation(Operation::Multiply);
        assert_eq!(state.display(), "81");
        assert_eq!(state.previous_value(), Some(81.0));
    }

    #[test]
    fn test_operator_twice_in_a_row_only_rebinds() {
        let mut state = CalculatorState::new();
        state.input_digit(9);
        state.apply_operation(Operation::Multiply);
        state.input_digit(9);
        state.apply_operation(Operation::Multiply);
        // No digits in between: this press must not recompute.
        state.apply_operation(Operation::Multiply);
        assert_eq!(state.display(), "81");
        assert_eq!(state.previous_value(), Some(81.0));
        state.input_digit(2);
        state.equals();
        assert_eq!(state.display(), "162");
    }

    #[test]
    fn test_operator_swap_uses_last_operator() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.apply_operation(Operation::Multiply);
        state.apply_operation(Operation::Subtract);
        state.input_digit(3);
        state.equals();
        assert_eq!(state.display(), "2");
    }

    // ===== Equals tests =====

    #[test]
    fn test_equals_settles_addition() {
        let mut state = CalculatorState::new();
        state.input_digit(3);
        state.apply_operation(Operation::Add);
        state.input_digit(4);
        state.equals();
        assert_eq!(state.display(), "7");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(state.waiting_for_operand());
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.equals();
        assert_eq!(state.display(), "5");
        assert!(!state.waiting_for_operand());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let mut state = CalculatorState::new();
        state.input_digit(3);
        state.apply_operation(Operation::Add);
        state.input_digit(4);
        state.equals();
        state.input_digit(8);
        assert_eq!(state.display(), "8");
    }

    #[test]
    fn test_chained_operators_fold_left() {
        let mut state = CalculatorState::new();
        state.input_digit(2);
        state.apply_operation(Operation::Add);
        state.input_digit(3);
        state.apply_operation(Operation::Add);
        assert_eq!(state.display(), "5");
        state.input_digit(4);
        state.equals();
        assert_eq!(state.display(), "9");
    }

    // ===== Unguarded arithmetic tests =====

    #[test]
    fn test_division_by_zero_displays_infinity() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.apply_operation(Operation::Divide);
        state.input_digit(0);
        state.equals();
        assert_eq!(state.display(), "Infinity");
    }

    #[test]
    fn test_negative_division_by_zero() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.toggle_sign();
        state.apply_operation(Operation::Divide);
        state.input_digit(0);
        state.equals();
        assert_eq!(state.display(), "-Infinity");
    }

    #[test]
    fn test_zero_over_zero_displays_nan() {
        let mut state = CalculatorState::new();
        state.input_digit(0);
        state.apply_operation(Operation::Divide);
        state.input_digit(0);
        state.equals();
        assert_eq!(state.display(), "NaN");
    }

    #[test]
    fn test_infinity_keeps_flowing() {
        let mut state = CalculatorState::new();
        state.input_digit(5);
        state.apply_operation(Operation::Divide);
        state.input_digit(0);
        state.apply_operation(Operation::Add);
        assert_eq!(state.display(), "Infinity");
        state.input_digit(1);
        state.equals();
        assert_eq!(state.display(), "Infinity");
    }

    // ===== Fractional arithmetic tests =====

    #[test]
    fn test_decimal_operands() {
        let mut state = CalculatorState::new();
        state.input_digit(1);
        state.input_decimal();
        state.input_digit(5);
        state.apply_operation(Operation::Add);
        state.input_digit(2);
        state.input_decimal();
        state.input_digit(5);
        state.equals();
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_binary_float_artifacts_are_not_hidden() {
        let mut state = CalculatorState::new();
        state.input_digit(0);
        state.input_decimal();
        state.input_digit(1);
        state.apply_operation(Operation::Add);
        state.input_digit(0);
        state.input_decimal();
        state.input_digit(2);
        state.equals();
        assert_eq!(state.display(), "0.30000000000000004");
    }

    // ===== Snapshot tests =====

    #[test]
    fn test_snapshot_mirrors_fields() {
        let mut state = CalculatorState::new();
        state.input_digit(7);
        state.apply_operation(Operation::Subtract);
        let snap = state.snapshot();
        assert_eq!(snap.display, "7");
        assert_eq!(snap.previous_value, Some(7.0));
        assert_eq!(snap.operation, Some(Operation::Subtract));
        assert!(snap.waiting_for_operand);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let mut state = CalculatorState::new();
        press_digits(&mut state, &[4, 2]);
        let snap = state.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
