//! Display-layer number formatting.
//!
//! The state machine stores values as strings and never truncates them; the
//! functions here only decide how a value is *shown*. Values too wide for
//! the display window fall back to exponential notation.

/// Longest display string rendered verbatim. Anything longer switches to
/// exponential notation.
pub const MAX_DISPLAY_CHARS: usize = 9;

/// Mantissa precision used by the exponential fallback.
pub const EXPONENT_DIGITS: usize = 3;

/// Renders a number the way the display stores it.
///
/// Special values render as the literal words `NaN`, `Infinity` and
/// `-Infinity`; zero is always `"0"`; everything else uses the shortest
/// decimal rendering that round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Negative zero can fall out of multiplication; it displays as plain zero.
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// The presentation transform applied to the display string.
///
/// Strings wider than [`MAX_DISPLAY_CHARS`] render in 3-digit exponential
/// notation. The stored string is left untouched; callers keep the full
/// value as state.
#[must_use]
pub fn format_display(value: &str) -> String {
    if value.len() > MAX_DISPLAY_CHARS {
        let parsed = value.parse::<f64>().unwrap_or(f64::NAN);
        to_exponential(parsed, EXPONENT_DIGITS)
    } else {
        value.to_string()
    }
}

/// Formats a value in exponential notation with `digits` mantissa digits
/// and an explicitly signed exponent, e.g. `1.235e+9`.
#[must_use]
pub fn to_exponential(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let formatted = format!("{value:.digits$e}");
    // Rust omits the '+' on non-negative exponents; the display keeps it.
    match formatted.find('e') {
        Some(pos) if !formatted[pos + 1..].starts_with('-') => {
            format!("{}e+{}", &formatted[..pos], &formatted[pos + 1..])
        }
        _ => formatted,
    }
}
