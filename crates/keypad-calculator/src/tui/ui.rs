//! Full-screen composition: header, display panel, keypad, key hints.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    app::CalculatorApp,
    keypad::{Keypad, KeypadWidget},
    theme::Theme,
};

/// Header bar title.
pub const HEADER_TITLE: &str = "keypad-calculator";

/// Key binding hints shown at the bottom of the screen.
pub const KEY_HINTS: &str = " 0-9 . + - * / % | n ± | Enter = | Esc AC | t theme | q quit ";

/// Splits the screen into header, display, keypad, and hint rows.
fn screen_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area)
        .to_vec()
}

/// The rectangle the keypad occupies for a given screen size. Mouse hit
/// testing must use the same rectangle the renderer draws into.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    screen_layout(area)[2]
}

/// Draws one frame of the calculator.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let theme = Theme::for_mode(app.dark_mode());
    let area = frame.area();
    let rows = screen_layout(area);

    frame.buffer_mut().set_style(area, Style::default().bg(theme.background));

    let header = Paragraph::new(HEADER_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(header, rows[0]);

    let display = Paragraph::new(app.display_text())
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.display_fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(display, rows[1]);

    let keypad = Keypad::new();
    frame.render_widget(
        KeypadWidget::new(&keypad, theme).active_operation(app.active_operation()),
        rows[2],
    );

    let hints = Paragraph::new(KEY_HINTS)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.function_fg));
    frame.render_widget(hints, rows[3]);
}
