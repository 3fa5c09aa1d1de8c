//! Scriptable driver for exercising the calculator.
//!
//! A script is a compact string of key characters (`"3+4="`), parsed into
//! button presses and replayed against a [`CalculatorDriver`]. The same
//! verification functions run against any driver implementation, so the
//! state machine and the TUI wrapper are checked by one set of scenarios.

use thiserror::Error;

use crate::core::{Operation, StateSnapshot};
use crate::tui::{ButtonAction, CalculatorApp};

/// A script character with no keypad equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no keypad button for {0:?}")]
pub struct UnknownKeyError(pub char);

/// Maps a script character to a button press.
///
/// Digits, `.`, `=`, `c` (clear), `n` (sign), `%`, and the four operator
/// characters (ASCII or keypad glyphs) are recognized.
#[must_use]
pub fn button_for_char(c: char) -> Option<ButtonAction> {
    match c {
        '0'..='9' => Some(ButtonAction::Digit(c as u8 - b'0')),
        '.' => Some(ButtonAction::Decimal),
        '=' => Some(ButtonAction::Equals),
        'c' => Some(ButtonAction::Clear),
        'n' => Some(ButtonAction::ToggleSign),
        '%' => Some(ButtonAction::Percent),
        _ => Operation::from_symbol(c)
            .filter(|op| *op != Operation::Equals)
            .map(ButtonAction::Operator),
    }
}

/// Parses a script into button presses. Whitespace is ignored; any other
/// unrecognized character is an error.
pub fn parse_script(script: &str) -> Result<Vec<ButtonAction>, UnknownKeyError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| button_for_char(c).ok_or(UnknownKeyError(c)))
        .collect()
}

/// A calculator that can be driven by scripted button presses.
pub trait CalculatorDriver {
    /// Presses one button.
    fn press(&mut self, action: ButtonAction);

    /// The raw display string.
    fn display(&self) -> String;

    /// The display string as the user sees it, after windowing.
    fn rendered_display(&self) -> String;

    /// Resets all state.
    fn reset(&mut self);

    /// Serializable snapshot of the calculator fields.
    fn snapshot(&self) -> StateSnapshot;

    /// Replays a script and returns the resulting raw display.
    fn run_script(&mut self, script: &str) -> Result<String, UnknownKeyError> {
        for action in parse_script(script)? {
            self.press(action);
        }
        Ok(self.display())
    }
}

/// Driver backed by the TUI application state.
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
}

impl TuiDriver {
    /// Creates a driver with a fresh calculator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: CalculatorApp::new(),
        }
    }

    /// The application under test.
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, action: ButtonAction) {
        self.app.press(action);
    }

    fn display(&self) -> String {
        self.app.state().display().to_string()
    }

    fn rendered_display(&self) -> String {
        self.app.display_text()
    }

    fn reset(&mut self) {
        self.app.press(ButtonAction::Clear);
    }

    fn snapshot(&self) -> StateSnapshot {
        self.app.snapshot()
    }
}

// ===== Unified verification scenarios =====

/// Digit entry: typed digits accumulate, leading zero is replaced.
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> Result<(), UnknownKeyError> {
    driver.reset();
    assert_eq!(driver.run_script("56")?, "56");
    driver.reset();
    assert_eq!(driver.run_script("007")?, "7");
    driver.reset();
    assert_eq!(driver.run_script("3.14")?, "3.14");
    Ok(())
}

/// The four operators over simple operands.
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) -> Result<(), UnknownKeyError> {
    let cases = [
        ("3+4=", "7"),
        ("9-2=", "7"),
        ("6*7=", "42"),
        ("8/2=", "4"),
        ("2+3+4=", "9"),
    ];
    for (script, expected) in cases {
        driver.reset();
        assert_eq!(driver.run_script(script)?, expected, "script {script:?}");
    }
    Ok(())
}

/// Division by zero follows IEEE 754 through to the display.
pub fn verify_division_by_zero<D: CalculatorDriver>(
    driver: &mut D,
) -> Result<(), UnknownKeyError> {
    driver.reset();
    assert_eq!(driver.run_script("5/0=")?, "Infinity");
    driver.reset();
    assert_eq!(driver.run_script("0/0=")?, "NaN");
    Ok(())
}

/// Pressing an operator twice rebinds it without recomputing.
pub fn verify_operator_rebind<D: CalculatorDriver>(driver: &mut D) -> Result<(), UnknownKeyError> {
    driver.reset();
    assert_eq!(driver.run_script("9*9*")?, "81");
    assert_eq!(driver.run_script("*2=")?, "162");
    driver.reset();
    assert_eq!(driver.run_script("5*-3=")?, "2");
    Ok(())
}

/// Sign toggle and percent act on the displayed value.
pub fn verify_sign_and_percent<D: CalculatorDriver>(
    driver: &mut D,
) -> Result<(), UnknownKeyError> {
    driver.reset();
    assert_eq!(driver.run_script("5n")?, "-5");
    assert_eq!(driver.run_script("n")?, "5");
    driver.reset();
    assert_eq!(driver.run_script("0n")?, "0");
    driver.reset();
    assert_eq!(driver.run_script("50%")?, "0.5");
    Ok(())
}

/// The rendered display compresses past nine characters; the raw display
/// does not.
pub fn verify_display_window<D: CalculatorDriver>(driver: &mut D) -> Result<(), UnknownKeyError> {
    driver.reset();
    driver.run_script("1234567890")?;
    assert_eq!(driver.display(), "1234567890");
    assert_eq!(driver.rendered_display(), "1.235e+9");
    Ok(())
}

/// Runs every verification scenario against a driver.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> Result<(), UnknownKeyError> {
    verify_digit_entry(driver)?;
    verify_arithmetic(driver)?;
    verify_division_by_zero(driver)?;
    verify_operator_rebind(driver)?;
    verify_sign_and_percent(driver)?;
    verify_display_window(driver)?;
    Ok(())
}
