// Date parsing and comparison predicates

use chrono::{NaiveDate, NaiveDateTime};

/// Format applied by [`is_date`], [`after`], and [`before`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// A date-only format parses to midnight so that date and datetime formats
// compare on the same axis.
fn parse_with(value: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

/// Parses with [`DEFAULT_DATE_FORMAT`].
pub fn is_date(value: &str) -> bool {
    parse_with(value, DEFAULT_DATE_FORMAT).is_some()
}

/// Parses with a caller-supplied chrono format string.
pub fn date_with_format(format: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let format = format.to_owned();
    move |value: &str| parse_with(value, &format).is_some()
}

/// Strictly later than `bound`, both in [`DEFAULT_DATE_FORMAT`].
pub fn after(bound: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    after_with_format(bound, DEFAULT_DATE_FORMAT)
}

/// Strictly later than `bound`, both in the given format. An unparsable
/// bound yields a predicate that is constantly false.
pub fn after_with_format(
    bound: &str,
    format: &str,
) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let format = format.to_owned();
    let bound = parse_with(bound, &format);
    move |value: &str| match (&bound, parse_with(value, &format)) {
        (Some(bound), Some(value)) => value > *bound,
        _ => false,
    }
}

/// Strictly earlier than `bound`, both in [`DEFAULT_DATE_FORMAT`].
pub fn before(bound: &str) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    before_with_format(bound, DEFAULT_DATE_FORMAT)
}

/// Strictly earlier than `bound`, both in the given format. An unparsable
/// bound yields a predicate that is constantly false.
pub fn before_with_format(
    bound: &str,
    format: &str,
) -> impl Fn(&str) -> bool + Send + Sync + use<> {
    let format = format.to_owned();
    let bound = parse_with(bound, &format);
    move |value: &str| match (&bound, parse_with(value, &format)) {
        (Some(bound), Some(value)) => value < *bound,
        _ => false,
    }
}
