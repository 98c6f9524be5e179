// Parsed-value predicates: booleans and numbers in string form

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// The literal `true` or `false`, case-insensitive.
pub fn is_bool(value: &str) -> bool {
    is_true(value) || is_false(value)
}

/// The literal `true`, case-insensitive.
pub fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// The literal `false`, case-insensitive.
pub fn is_false(value: &str) -> bool {
    value.eq_ignore_ascii_case("false")
}

/// A signed integer within `i64` range.
pub fn is_int(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// Decimal notation with an optional sign, fraction, and exponent.
/// Rejects the `inf`/`NaN` spellings `f64` parsing would accept.
pub fn is_float(value: &str) -> bool {
    FLOAT_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bool() {
        assert!(is_bool("true"));
        assert!(is_bool("False"));
        assert!(is_bool("TRUE"));
        assert!(!is_bool("yes"));
        assert!(!is_bool("1"));
        assert!(!is_bool(""));
    }

    #[test]
    fn test_is_true_is_false() {
        assert!(is_true("True"));
        assert!(!is_true("false"));
        assert!(is_false("FALSE"));
        assert!(!is_false("true"));
    }

    #[test]
    fn test_is_int() {
        assert!(is_int("42"));
        assert!(is_int("-7"));
        assert!(is_int("+7"));
        assert!(is_int("0"));
        assert!(!is_int("42.0"));
        assert!(!is_int("forty-two"));
        assert!(!is_int(""));
        // Beyond i64 range fails rather than wrapping
        assert!(!is_int("99999999999999999999999999"));
    }

    #[test]
    fn test_is_float() {
        assert!(is_float("42"));
        assert!(is_float("42.5"));
        assert!(is_float("-0.5"));
        assert!(is_float(".5"));
        assert!(is_float("1e10"));
        assert!(is_float("6.02e23"));
        assert!(!is_float("inf"));
        assert!(!is_float("NaN"));
        assert!(!is_float("1.2.3"));
        assert!(!is_float(""));
    }
}
