//! Shared scanners for money and duration display strings.
//!
//! Providers embed fees and ETAs in human-facing text ("$3.99
//! Delivery Fee", "15–25 min"); these helpers pull the leading
//! numeric value back out. `pub(crate)` so every service module can
//! share them.

/// Parses a leading dollar amount: `"$3.99 Delivery Fee"` → `3.99`,
/// `"$0.00 delivery fee"` → `0.0`. Returns `None` when the text does
/// not start with a dollar figure.
pub(crate) fn parse_leading_dollar_amount(text: &str) -> Option<f64> {
    let first_word = text.split_whitespace().next()?;
    first_word.strip_prefix('$')?.parse::<f64>().ok()
}

/// Parses the leading unsigned integer of an ETA display string,
/// stopping at the first non-digit. Handles range strings joined by
/// an en dash with no spaces: `"15–25 min"` → `15`, `"24 min"` → `24`.
pub(crate) fn parse_leading_u32(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// Converts a minor-unit (cents) price to decimal currency units.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn cents_to_decimal(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_amount_from_fare_badge() {
        assert_eq!(parse_leading_dollar_amount("$3.99 Delivery Fee"), Some(3.99));
    }

    #[test]
    fn dollar_amount_zero_fee() {
        assert_eq!(parse_leading_dollar_amount("$0.00 delivery fee"), Some(0.0));
    }

    #[test]
    fn dollar_amount_requires_dollar_prefix() {
        assert_eq!(parse_leading_dollar_amount("3.99 Delivery Fee"), None);
        assert_eq!(parse_leading_dollar_amount("Free delivery"), None);
        assert_eq!(parse_leading_dollar_amount(""), None);
    }

    #[test]
    fn leading_u32_from_eta_range() {
        assert_eq!(parse_leading_u32("15–25 min"), Some(15));
    }

    #[test]
    fn leading_u32_from_single_eta() {
        assert_eq!(parse_leading_u32("24 min"), Some(24));
    }

    #[test]
    fn leading_u32_rejects_non_numeric() {
        assert_eq!(parse_leading_u32("about half an hour"), None);
    }

    #[test]
    fn cents_convert_to_decimal() {
        assert!((cents_to_decimal(899) - 8.99).abs() < 1e-9);
        assert!((cents_to_decimal(0)).abs() < 1e-9);
    }
}
