use chrono::{Datelike, NaiveDate};

use crate::error::DataError;

/// Convert a date to its canonical `DD-MM-YYYY` key.
///
/// Day and month are zero-padded to two digits; the year is printed
/// as-is. Formatting is done over the integer components directly so
/// the result round-trips through `parse_key`.
pub fn format_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

/// Parse a canonical `DD-MM-YYYY` key back into a date.
///
/// Anything that is not three dash-separated numeric parts naming a
/// real calendar date is rejected. A malformed key here means the
/// store's data is suspect, so the error is surfaced rather than
/// swallowed.
pub fn parse_key(key: &str) -> Result<NaiveDate, DataError> {
    let bad = || DataError::InvalidDateKey(key.to_string());

    let parts: Vec<&str> = key.split('-').collect();
    if parts.len() != 3 {
        return Err(bad());
    }

    let day: u32 = parts[0].parse().map_err(|_| bad())?;
    let month: u32 = parts[1].parse().map_err(|_| bad())?;
    let year: i32 = parts[2].parse().map_err(|_| bad())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)
}

/// Variant of `parse_key` for callers that may not have a key yet:
/// `None` parses to `None` instead of failing.
pub fn parse_key_opt(key: Option<&str>) -> Result<Option<NaiveDate>, DataError> {
    match key {
        Some(k) => parse_key(k).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_zero_pads_day_and_month() {
        assert_eq!(format_key(date(2025, 12, 1)), "01-12-2025");
        assert_eq!(format_key(date(2025, 1, 5)), "05-01-2025");
        assert_eq!(format_key(date(2025, 11, 28)), "28-11-2025");
    }

    #[test]
    fn test_parse_canonical_key() {
        assert_eq!(parse_key("01-12-2025").unwrap(), date(2025, 12, 1));
        assert_eq!(parse_key("29-02-2024").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            date(2025, 12, 1),
            date(2025, 1, 31),
            date(2024, 2, 29),
            date(1999, 6, 9),
            date(1, 1, 1),
            date(12345, 10, 30),
        ];
        for d in samples {
            assert_eq!(parse_key(&format_key(d)).unwrap(), d, "round trip for {d}");
        }
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(parse_key("01-12").is_err());
        assert!(parse_key("01-12-2025-00").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_parts() {
        assert!(parse_key("aa-12-2025").is_err());
        assert!(parse_key("01-xx-2025").is_err());
        assert!(parse_key("01-12-twenty").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_key("32-01-2025").is_err());
        assert!(parse_key("01-13-2025").is_err());
        assert!(parse_key("29-02-2025").is_err()); // not a leap year
        assert!(parse_key("00-01-2025").is_err());
    }

    #[test]
    fn test_parse_error_carries_the_key() {
        let err = parse_key("not-a-key").unwrap_err();
        assert_eq!(err, DataError::InvalidDateKey("not-a-key".to_string()));
    }

    #[test]
    fn test_parse_opt_none_is_not_an_error() {
        assert_eq!(parse_key_opt(None).unwrap(), None);
        assert_eq!(
            parse_key_opt(Some("01-12-2025")).unwrap(),
            Some(date(2025, 12, 1))
        );
        assert!(parse_key_opt(Some("garbage")).is_err());
    }
}
