//! Binary operations selected from the keypad's operator column.

use serde::{Deserialize, Serialize};

/// Type-safe operation enum covering the operator symbols `+ − × ÷ =`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Equals (=), which passes the second operand through
    Equals,
}

impl Operation {
    /// Returns the keypad symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Parses a symbol back into an operation.
    ///
    /// Accepts the keypad glyphs as well as their ASCII keyboard aliases
    /// (`-`, `*`, `x`, `/`).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '−' | '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }
}

/// Applies `op` to the two operands.
///
/// Native f64 semantics throughout: division by zero yields infinity and
/// `0 ÷ 0` yields NaN rather than raising an error. `Equals` returns the
/// second operand unchanged.
#[must_use]
pub fn calculate(a: f64, b: f64, op: Operation) -> f64 {
    match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => a / b,
        Operation::Equals => b,
    }
}
