//! Fixed palettes for the two presentation variants.
//!
//! `dark_mode` is a pure presentation flag: it selects one of exactly two
//! palettes and has no computational effect. This is deliberately not a
//! theming system.

use ratatui::style::Color;

/// Palette consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Display panel text.
    pub display_fg: Color,
    /// Digit and decimal buttons.
    pub digit_fg: Color,
    /// Function buttons (AC, ±, %).
    pub function_fg: Color,
    /// Operator column and equals.
    pub operator_fg: Color,
    /// Pending operator, inverted.
    pub operator_active_fg: Color,
    /// Pending operator background, inverted.
    pub operator_active_bg: Color,
    /// Header bar text.
    pub header_fg: Color,
    /// Panel borders.
    pub border: Color,
}

/// Operator accent shared by both palettes.
const ORANGE: Color = Color::Rgb(249, 115, 22);

impl Theme {
    /// The dark palette (the default skin).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Black,
            display_fg: Color::White,
            digit_fg: Color::Gray,
            function_fg: Color::DarkGray,
            operator_fg: ORANGE,
            operator_active_fg: ORANGE,
            operator_active_bg: Color::White,
            header_fg: Color::White,
            border: Color::DarkGray,
        }
    }

    /// The light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::White,
            display_fg: Color::Black,
            digit_fg: Color::DarkGray,
            function_fg: Color::Gray,
            operator_fg: ORANGE,
            operator_active_fg: Color::White,
            operator_active_bg: ORANGE,
            header_fg: Color::Black,
            border: Color::Gray,
        }
    }

    /// Selects the palette for the given presentation flag.
    #[must_use]
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
