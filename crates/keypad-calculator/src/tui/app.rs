//! Application state for the TUI: one calculator plus presentation flags.

use tracing::debug;

use crate::core::{format_display, CalculatorState, Operation, StateSnapshot};

use super::keypad::ButtonAction;

/// Top-level TUI state: the calculator, a dark-mode flag, and a quit flag.
///
/// The dark-mode flag is pure presentation; every computational path goes
/// through [`CalculatorState`].
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    state: CalculatorState,
    dark_mode: bool,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates the app in dark mode, matching the default skin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dark_mode(true)
    }

    /// Creates the app with an explicit presentation mode.
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            state: CalculatorState::new(),
            dark_mode,
            should_quit: false,
        }
    }

    /// The underlying calculator state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The current presentation mode.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Flips the presentation mode. No computational effect.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    /// The display string after the presentation transform.
    #[must_use]
    pub fn display_text(&self) -> String {
        format_display(self.state.display())
    }

    /// The pending operator, for the keypad highlight.
    #[must_use]
    pub fn active_operation(&self) -> Option<Operation> {
        self.state.operation()
    }

    /// Dispatches one button press as a single synchronous transition.
    pub fn press(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => self.state.input_digit(d),
            ButtonAction::Decimal => self.state.input_decimal(),
            ButtonAction::Operator(op) => self.state.apply_operation(op),
            ButtonAction::Equals => self.state.equals(),
            ButtonAction::Clear => self.state.clear(),
            ButtonAction::ToggleSign => self.state.toggle_sign(),
            ButtonAction::Percent => self.state.percentage(),
        }
        debug!(?action, display = %self.state.display(), "button applied");
    }

    /// Serializable snapshot of the calculator fields.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }
}
