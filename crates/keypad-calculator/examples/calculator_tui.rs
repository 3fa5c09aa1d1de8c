//! Interactive calculator. Run with:
//!
//! ```sh
//! cargo run --example calculator_tui
//! ```
//!
//! Keys: digits, `.`, `+ - * /`, `%`, `n` for sign, Enter or `=` for equals,
//! Esc or `c` for AC, `t` to toggle the theme, `q` to quit. Buttons also
//! respond to mouse clicks.

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use keypad_calculator::tui::{ui, CalculatorApp, InputHandler, KeyAction, Keypad};

fn main() -> io::Result<()> {
    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();
    let keypad = Keypad::new();

    loop {
        terminal.draw(|f| ui::render(&app, f))?;

        match event::read()? {
            Event::Key(key) => match handler.handle_key(key) {
                KeyAction::Button(action) => app.press(action),
                KeyAction::ToggleTheme => app.toggle_dark_mode(),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                if let Some(action) = keypad.hit_test(ui::keypad_area(screen), column, row) {
                    app.press(action);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
