// Identifier and checksum predicates

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static MONGO_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").unwrap());

static CARD_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12,19}$").unwrap());

static PHONE_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    [
        (
            "en-US",
            r"^(\+?1[-. ]?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})[-. ]?[0-9]{3}[-. ]?[0-9]{4}$",
        ),
        (
            "en-CA",
            r"^(\+?1[-. ]?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})[-. ]?[0-9]{3}[-. ]?[0-9]{4}$",
        ),
        ("en-GB", r"^(\+?44|0)7[0-9]{9}$"),
        ("en-AU", r"^(\+?61|0)4[0-9]{8}$"),
        ("en-HK", r"^(\+?852[-\s]?)?[456789][0-9]{3}[-\s]?[0-9]{4}$"),
        ("en-ZA", r"^(\+?27|0)[0-9]{9}$"),
        ("fr-FR", r"^(\+?33|0)[67][0-9]{8}$"),
        ("pt-PT", r"^(\+?351)?9[1236][0-9]{7}$"),
        ("el-GR", r"^(\+?30)?69[0-9]{8}$"),
        ("zh-CN", r"^(\+?86)?1[3-9][0-9]{9}$"),
        ("ru-RU", r"^(\+?7|8)9[0-9]{9}$"),
    ]
    .into_iter()
    .map(|(locale, pattern)| (locale, Regex::new(pattern).unwrap()))
    .collect()
});

/// Hyphenated hexadecimal UUID, any case.
pub fn is_uuid(value: &str) -> bool {
    UUID_REGEX.is_match(value)
}

/// 24-character hexadecimal MongoDB ObjectId.
pub fn is_mongo_id(value: &str) -> bool {
    MONGO_ID_REGEX.is_match(value)
}

/// Payment card number: 12-19 digits after stripping spaces and hyphens,
/// passing the Luhn checksum.
pub fn is_credit_card(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    CARD_DIGITS_REGEX.is_match(&digits) && luhn(&digits)
}

fn luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        let d = if double {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
        sum += d;
        double = !double;
    }
    sum % 10 == 0
}

/// Which ISBN checksum [`isbn`] verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnVersion {
    Ten,
    Thirteen,
}

/// ISBN check for the given version. Hyphens and spaces are ignored.
pub fn isbn(version: IsbnVersion) -> impl Fn(&str) -> bool + Send + Sync {
    move |value: &str| {
        let stripped: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        match version {
            IsbnVersion::Ten => isbn10(&stripped),
            IsbnVersion::Thirteen => isbn13(&stripped),
        }
    }
}

// Weighted sum mod 11; the final position may be the digit ten written X.
fn isbn10(value: &str) -> bool {
    if value.chars().count() != 10 {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in value.chars().enumerate() {
        let digit = match c.to_digit(10) {
            Some(d) => d,
            None if i == 9 && (c == 'X' || c == 'x') => 10,
            None => return false,
        };
        sum += digit * (10 - i as u32);
    }
    sum % 11 == 0
}

// Alternating 1/3 weights mod 10.
fn isbn13(value: &str) -> bool {
    if value.len() != 13 {
        return false;
    }
    let mut sum = 0u32;
    for (i, c) in value.chars().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += digit * if i % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}

/// Phone number check for a locale tag such as `en-US`. Locales without a
/// registered pattern yield a predicate that is constantly false.
pub fn phone(locale: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let pattern = PHONE_PATTERNS.get(locale).cloned();
    if pattern.is_none() {
        log::warn!("no phone number pattern registered for locale {locale:?}");
    }
    move |value: &str| pattern.as_ref().is_some_and(|re| re.is_match(value))
}
