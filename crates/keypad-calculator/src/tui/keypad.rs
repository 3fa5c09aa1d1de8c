//! Button grid for the calculator keypad.
//!
//! Mirrors the physical layout, with `0` spanning two columns:
//!
//! ```text
//! [AC] [±] [%] [÷]
//! [ 7] [8] [9] [×]
//! [ 4] [5] [6] [−]
//! [ 1] [2] [3] [+]
//! [ 0     ] [.] [=]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::core::Operation;

use super::theme::Theme;

/// Grid rows.
pub const KEYPAD_ROWS: u16 = 5;
/// Grid columns.
pub const KEYPAD_COLS: u16 = 4;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// What a button does when pressed. Labels map 1:1 onto the calculator's
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9).
    Digit(u8),
    /// Enter the decimal point.
    Decimal,
    /// Bind a pending operator.
    Operator(Operation),
    /// Settle the pending computation.
    Equals,
    /// AC: reset all state.
    Clear,
    /// ±: flip the sign of the display.
    ToggleSign,
    /// %: divide the display by 100.
    Percent,
}

impl ButtonAction {
    /// The keypad label for this action.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[usize::from(*d).min(9)],
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::ToggleSign => "±",
            Self::Percent => "%",
        }
    }
}

/// A single keypad button with its grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action performed on press.
    pub action: ButtonAction,
    /// Grid row (0 at the top).
    pub row: u16,
    /// Leftmost grid column this button occupies.
    pub col: u16,
    /// Number of columns occupied (`0` is double-wide).
    pub span: u16,
}

/// The 5x4 button grid.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction as A;
        use Operation as Op;

        let layout: [(A, u16, u16, u16); 19] = [
            // Row 1: AC ± % ÷
            (A::Clear, 0, 0, 1),
            (A::ToggleSign, 0, 1, 1),
            (A::Percent, 0, 2, 1),
            (A::Operator(Op::Divide), 0, 3, 1),
            // Row 2: 7 8 9 ×
            (A::Digit(7), 1, 0, 1),
            (A::Digit(8), 1, 1, 1),
            (A::Digit(9), 1, 2, 1),
            (A::Operator(Op::Multiply), 1, 3, 1),
            // Row 3: 4 5 6 −
            (A::Digit(4), 2, 0, 1),
            (A::Digit(5), 2, 1, 1),
            (A::Digit(6), 2, 2, 1),
            (A::Operator(Op::Subtract), 2, 3, 1),
            // Row 4: 1 2 3 +
            (A::Digit(1), 3, 0, 1),
            (A::Digit(2), 3, 1, 1),
            (A::Digit(3), 3, 2, 1),
            (A::Operator(Op::Add), 3, 3, 1),
            // Row 5: 0 (wide) . =
            (A::Digit(0), 4, 0, 2),
            (A::Decimal, 4, 2, 1),
            (A::Equals, 4, 3, 1),
        ];

        Self {
            buttons: layout
                .iter()
                .map(|&(action, row, col, span)| KeypadButton {
                    action,
                    row,
                    col,
                    span,
                })
                .collect(),
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Resolves a grid cell to the button covering it. Wide buttons cover
    /// several cells.
    #[must_use]
    pub fn button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }

    /// Finds the button carrying the given label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action.label() == label)
    }

    /// Maps a terminal click inside `area` to the button underneath it.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }
        let cell_w = area.width / KEYPAD_COLS;
        let cell_h = area.height / KEYPAD_ROWS;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let col = (x - area.x) / cell_w;
        let row = (y - area.y) / cell_h;
        if row >= KEYPAD_ROWS || col >= KEYPAD_COLS {
            return None;
        }
        self.button_at(row, col).map(|b| b.action)
    }
}

/// Renders the keypad grid, highlighting the pending operator.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: Theme,
    active_operation: Option<Operation>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad, theme: Theme) -> Self {
        Self {
            keypad,
            theme,
            active_operation: None,
        }
    }

    /// Highlights the pending operator button, matching the display
    /// convention where the selected operator renders inverted until the
    /// next operand arrives.
    #[must_use]
    pub fn active_operation(mut self, op: Option<Operation>) -> Self {
        self.active_operation = op;
        self
    }

    fn button_style(&self, action: ButtonAction) -> Style {
        let theme = self.theme;
        match action {
            ButtonAction::Operator(op) if Some(op) == self.active_operation => Style::default()
                .fg(theme.operator_active_fg)
                .bg(theme.operator_active_bg)
                .add_modifier(Modifier::BOLD),
            ButtonAction::Operator(_) | ButtonAction::Equals => Style::default()
                .fg(theme.operator_fg)
                .add_modifier(Modifier::BOLD),
            ButtonAction::Clear | ButtonAction::ToggleSign | ButtonAction::Percent => {
                Style::default().fg(theme.function_fg)
            }
            ButtonAction::Digit(_) | ButtonAction::Decimal => {
                Style::default().fg(theme.digit_fg)
            }
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell_w = area.width / KEYPAD_COLS;
        let cell_h = area.height / KEYPAD_ROWS;
        if cell_w < 4 || cell_h == 0 {
            return; // Too small to render
        }

        for btn in self.keypad.buttons() {
            let width = cell_w * btn.span;
            let x = area.x + btn.col * cell_w;
            let y = area.y + btn.row * cell_h + cell_h / 2;

            let label = format!("[{}]", btn.action.label());
            // Labels include multi-byte glyphs; center on character count.
            let label_chars = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_chars) / 2;

            if y < area.y + area.height {
                buf.set_span(
                    label_x,
                    y,
                    &Span::styled(label, self.button_style(btn.action)),
                    width,
                );
            }
        }
    }
}
