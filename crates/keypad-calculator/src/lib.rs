//! A four-function keypad calculator with a terminal front end.
//!
//! The crate splits into three layers:
//!
//! - [`core`]: the calculator state machine, its binary operations, and the
//!   display formatting rules. Pure data, no terminal types.
//! - [`tui`]: application state, the keypad grid, keyboard mapping, palettes,
//!   and the ratatui renderer.
//! - [`driver`]: a scriptable harness that replays key sequences against the
//!   calculator for verification.
//!
//! # Example
//!
//! ```
//! use keypad_calculator::core::{CalculatorState, Operation};
//!
//! let mut calc = CalculatorState::new();
//! calc.input_digit(3);
//! calc.apply_operation(Operation::Add);
//! calc.input_digit(4);
//! calc.equals();
//! assert_eq!(calc.display(), "7");
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod core;
pub mod driver;
pub mod tui;

/// Commonly used items.
pub mod prelude {
    pub use crate::core::{
        calculate, format_display, format_number, CalculatorState, Operation, StateSnapshot,
    };
    pub use crate::driver::{parse_script, CalculatorDriver, TuiDriver};
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad, Theme};
}
