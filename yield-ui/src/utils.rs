use tracing::warn;

/// Normalizes raw field input: trims whitespace and removes commas
/// (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses raw field input into an optional `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Returns `None`
/// for empty or whitespace-only input, and for input that does not parse as
/// a finite number (logs a warning); the field is then treated as absent,
/// the way an empty form field would be.
pub fn parse_number(s: &str) -> Option<f64> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return None;
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            warn!(input = %s, %value, "non-finite number input treated as absent");
            None
        }
        Err(err) => {
            warn!(input = %s, "invalid number input treated as absent: {}", err);
            None
        }
    }
}

/// Formats a value with the shortest round-trip representation. Both
/// renderers go through this (or the equivalent JSON encoding), so the
/// table and the chart always show identical numbers.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_number_accepts_plain_and_fractional_values() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number("-5"), Some(-5.0));
    }

    #[test]
    fn parse_number_accepts_comma_thousands_separator() {
        assert_eq!(parse_number("1,234.56"), Some(1234.56));
        assert_eq!(parse_number("1,234,567"), Some(1234567.0));
    }

    #[test]
    fn parse_number_trims_whitespace() {
        assert_eq!(parse_number("  42  "), Some(42.0));
    }

    #[test]
    fn parse_number_treats_empty_as_absent() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn parse_number_treats_garbage_as_absent() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn parse_number_treats_non_finite_as_absent() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0), "1");
    }
}
