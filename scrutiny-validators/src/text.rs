// Text content and shape predicates

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static HEXADECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());

static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static BASE64_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{4}|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)$")
        .unwrap()
});

/// Substring containment.
pub fn contains(needle: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let needle = needle.to_owned();
    move |value: &str| value.contains(needle.as_str())
}

/// Exact string equality.
pub fn equals(expected: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let expected = expected.to_owned();
    move |value: &str| value == expected.as_str()
}

/// Exactly `length` characters (Unicode scalars, not bytes).
pub fn exact_length(length: usize) -> impl Fn(&str) -> bool + Send + Sync {
    move |value: &str| value.chars().count() == length
}

/// At least `length` characters.
pub fn min_length(length: usize) -> impl Fn(&str) -> bool + Send + Sync {
    move |value: &str| value.chars().count() >= length
}

/// At most `length` characters.
pub fn max_length(length: usize) -> impl Fn(&str) -> bool + Send + Sync {
    move |value: &str| value.chars().count() <= length
}

/// Membership in a fixed list of allowed values.
pub fn is_in(allowed: &[&str]) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let allowed: Vec<String> = allowed.iter().map(|s| (*s).to_owned()).collect();
    move |value: &str| allowed.iter().any(|candidate| candidate == value)
}

/// The empty string.
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Any non-empty string. Whitespace counts as content.
pub fn required(value: &str) -> bool {
    !value.is_empty()
}

/// Non-empty and entirely ASCII.
pub fn is_ascii(value: &str) -> bool {
    !value.is_empty() && value.is_ascii()
}

/// ASCII letters only.
pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

/// ASCII letters and digits only.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

/// ASCII digits only.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

/// Hexadecimal digits only.
pub fn is_hexadecimal(value: &str) -> bool {
    HEXADECIMAL_REGEX.is_match(value)
}

/// A three- or six-digit hex color, with or without the leading `#`.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Standard base64 with padding.
pub fn is_base64(value: &str) -> bool {
    BASE64_REGEX.is_match(value)
}

/// Non-empty with no uppercase letters.
pub fn is_lowercase(value: &str) -> bool {
    !value.is_empty() && value == value.to_lowercase()
}

/// Non-empty with no lowercase letters.
pub fn is_uppercase(value: &str) -> bool {
    !value.is_empty() && value == value.to_uppercase()
}
