//! Form input parsing
//!
//! Numeric form fields never fail: unparsable input reads as zero.

use std::str::FromStr;

/// Parse a trimmed number, falling back to the type's zero value
#[must_use]
pub(crate) fn parse_or_zero<T: FromStr + Default>(input: &str) -> T {
    input.trim().parse().unwrap_or_default()
}

/// Parse an optional id field; blank or invalid input means no id
#[must_use]
pub(crate) fn parse_optional_id(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        input.parse().ok()
    }
}

/// Trimmed text, or `None` when blank
#[must_use]
pub(crate) fn non_blank(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_fall_back_to_zero() {
        assert_eq!(parse_or_zero::<u64>(" 85000 "), 85_000);
        assert_eq!(parse_or_zero::<u64>("eighty"), 0);
        assert_eq!(parse_or_zero::<u64>(""), 0);
        assert!((parse_or_zero::<f64>("4500000.5") - 4_500_000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn optional_ids() {
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(parse_optional_id("2"), Some(2));
        assert_eq!(parse_optional_id("two"), None);
    }

    #[test]
    fn blank_text() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" Plot A-01 ").as_deref(), Some("Plot A-01"));
    }
}
