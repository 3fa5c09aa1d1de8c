//! Keyboard mapping for the calculator.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;

use super::keypad::ButtonAction;

/// Actions triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button.
    Button(ButtonAction),
    /// Flip the dark/light presentation flag.
    ToggleTheme,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Button(ButtonAction::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyAction::Button(ButtonAction::Decimal),
            KeyCode::Char('+') => KeyAction::Button(ButtonAction::Operator(Operation::Add)),
            KeyCode::Char('-') => KeyAction::Button(ButtonAction::Operator(Operation::Subtract)),
            KeyCode::Char('*' | 'x') => {
                KeyAction::Button(ButtonAction::Operator(Operation::Multiply))
            }
            KeyCode::Char('/') => KeyAction::Button(ButtonAction::Operator(Operation::Divide)),
            KeyCode::Char('%') => KeyAction::Button(ButtonAction::Percent),
            KeyCode::Char('n') => KeyAction::Button(ButtonAction::ToggleSign),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Button(ButtonAction::Equals),
            KeyCode::Char('c') | KeyCode::Esc => KeyAction::Button(ButtonAction::Clear),
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
