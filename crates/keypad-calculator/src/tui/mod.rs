//! Terminal front end: application state, keypad model, keyboard mapping,
//! palettes, and the screen renderer.

pub mod app;
pub mod input;
pub mod keypad;
pub mod theme;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget, KEYPAD_COLS, KEYPAD_ROWS};
pub use theme::Theme;
pub use ui::{keypad_area, render};
