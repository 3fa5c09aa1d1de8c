//! Calculator core: the state machine, its operations, and display
//! formatting. Nothing here knows about terminals or rendering.

pub mod format;
pub mod operations;
pub mod state;

pub use format::{
    format_display, format_number, to_exponential, EXPONENT_DIGITS, MAX_DISPLAY_CHARS,
};
pub use operations::{calculate, Operation};
pub use state::{CalculatorState, StateSnapshot};
