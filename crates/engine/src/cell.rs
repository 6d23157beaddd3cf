//! Numeric interpretation of cell text.
//!
//! Cells hold arbitrary text; a cell only contributes to a column total when
//! its trimmed text parses as a decimal number. Anything else (empty, words,
//! half-numeric junk) contributes nothing — text is a valid input class, not
//! an error.

/// Parse cell text as a number, or `None` if it isn't one.
///
/// Accepts standard decimal syntax: optional sign, fractional part, exponent.
/// Leading/trailing whitespace is ignored.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Render a computed total as cell text.
///
/// Integral values print without a fractional part ("7", not "7.0");
/// everything else uses shortest round-trip formatting.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
