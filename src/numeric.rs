// Decimal, percentage, and count parsing plus display formatting.
//
// This module centralizes the "dirty" numeric-text handling so the rest of
// the engine can assume clean, typed values. Metrics are arbitrary-precision
// `Decimal`s, never floats: cost and conversion-value sums must stay exact.
use crate::errors::FormatError;
use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;

/// Parse a raw cell into a `Decimal`.
///
/// - Trims whitespace.
/// - Returns `Ok(None)` for empty input ("value absent").
/// - Strips thousands separators like `","` before parsing.
/// - Uses a fixed `.` decimal-point convention, never the process locale.
/// - Anything else non-numeric is a `FormatError`; callers must supply
///   already-sanitized numeric text and get a hard failure otherwise.
pub fn parse_decimal(raw: &str) -> Result<Option<Decimal>, FormatError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let s = s.replace(',', "");
    s.parse::<Decimal>()
        .map(Some)
        .map_err(|_| FormatError::NotNumeric(raw.trim().to_string()))
}

/// Like `parse_decimal`, but strips a single trailing `%` first so
/// `"12.3%"` and `"12.3"` decode identically.
pub fn parse_percentage(raw: &str) -> Result<Option<Decimal>, FormatError> {
    let s = raw.trim();
    parse_decimal(s.strip_suffix('%').unwrap_or(s))
}

/// Parse a raw cell into an integer count or identifier.
pub fn parse_count(raw: &str) -> Result<Option<i64>, FormatError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let s = s.replace(',', "");
    s.parse::<i64>()
        .map(Some)
        .map_err(|_| FormatError::NotCount(raw.trim().to_string()))
}

/// Fixed-point display of an optional metric.
///
/// `None` renders as the empty string (not a literal "null") so optional
/// metrics stay round-trip safe: `parse_decimal(format_decimal(v)) == v`.
pub fn format_decimal(value: Option<Decimal>) -> String {
    match value {
        Some(d) => d.to_string(),
        None => String::new(),
    }
}

/// Console display of a `Decimal` with two decimal places and locale-style
/// thousands separators (e.g. `1,234,567.89`). Display only; never fed back
/// into the parsers' storage path.
pub fn format_grouped(value: Decimal) -> String {
    let neg = value.is_sign_negative();
    let s = format!("{:.2}", value.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next().unwrap_or("00");
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    res.push('.');
    res.push_str(frac_part);
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Thin wrapper around `num-format` for integer counts in console messages
/// (e.g. `9,855 rows decoded`).
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn empty_and_blank_input_is_absent() {
        assert_eq!(parse_decimal("").unwrap(), None);
        assert_eq!(parse_decimal("   ").unwrap(), None);
        assert_eq!(parse_count("").unwrap(), None);
        assert_eq!(parse_percentage("").unwrap(), None);
    }

    #[test]
    fn plain_and_signed_decimals_parse() {
        assert_eq!(parse_decimal("37.5").unwrap(), Some(dec("37.5")));
        assert_eq!(parse_decimal("-0.25").unwrap(), Some(dec("-0.25")));
        assert_eq!(parse_decimal(" 12 ").unwrap(), Some(dec("12")));
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), Some(dec("1234567.89")));
        assert_eq!(parse_count("1,234").unwrap(), Some(1234));
    }

    #[test]
    fn non_numeric_text_is_a_hard_failure() {
        assert_eq!(
            parse_decimal("abc").unwrap_err(),
            FormatError::NotNumeric("abc".to_string())
        );
        assert_eq!(
            parse_count("12.5").unwrap_err(),
            FormatError::NotCount("12.5".to_string())
        );
    }

    #[test]
    fn percentage_and_plain_forms_decode_identically() {
        assert_eq!(parse_percentage("37.5%").unwrap(), Some(dec("37.5")));
        assert_eq!(parse_percentage("37.5").unwrap(), Some(dec("37.5")));
        // only a single trailing '%' is stripped
        assert!(parse_percentage("37.5%%").is_err());
    }

    #[test]
    fn format_round_trips_through_parse() {
        for s in ["0", "12.34", "-0.5", "1000000.01"] {
            let d = dec(s);
            assert_eq!(parse_decimal(&format_decimal(Some(d))).unwrap(), Some(d));
        }
        assert_eq!(format_decimal(None), "");
        assert_eq!(parse_decimal(&format_decimal(None)).unwrap(), None);
    }

    #[test]
    fn grouped_display_inserts_separators() {
        assert_eq!(format_grouped(dec("1234567.891")), "1,234,567.89");
        assert_eq!(format_grouped(dec("-42")), "-42.00");
        assert_eq!(format_int(9855i64), "9,855");
    }
}
