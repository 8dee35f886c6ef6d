//! Coercion of timestamp columns to UTC instants.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

/// Formats carrying an explicit offset, tried after RFC 3339.
///
/// `%.f` makes fractional seconds optional.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M%:z",
];

/// Formats without an offset. These are taken to be UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable timestamp '{value}'")]
pub struct TimestampError {
    pub value: String,
}

/// Parse a timestamp column value into a UTC instant.
///
/// Accepts, in order:
///
/// * seconds since the Unix epoch, optionally fractional (`1704067200.5`);
/// * ISO 8601 date-times with a `T` or space separator, optional seconds,
///   optional fractional seconds and an offset of `Z`, `+HH:MM`, `+HHMM` or
///   `+HH`;
/// * the same without any offset, interpreted as UTC;
/// * a bare date (`2024-01-01`), read as midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    if let Some(ts) = parse_epoch(value) {
        return Ok(ts);
    }

    let normalized = normalize_offset(value);

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, format) {
            return Ok(ts.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&ts));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(TimestampError {
        value: value.to_string(),
    })
}

/// Render `ts` as RFC 3339 with a `Z` designator and only as many fractional
/// digits as needed.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Rewrite a `Z` designator as `+00:00` and an hour-only offset such as
/// `-05` as `-05:00`.
fn normalize_offset(value: &str) -> Cow<'_, str> {
    if let Some(local) = value.strip_suffix(['Z', 'z']) {
        return Cow::Owned(format!("{local}+00:00"));
    }

    // the offset can only follow the time, which starts after the date
    let Some(time) = value.get(10..) else {
        return Cow::Borrowed(value);
    };
    match time.rfind(['+', '-']) {
        Some(sign)
            if time.len() - sign == 3
                && time[sign + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            Cow::Owned(format!("{value}:00"))
        }
        _ => Cow::Borrowed(value),
    }
}

fn parse_epoch(value: &str) -> Option<DateTime<Utc>> {
    let seconds = value.parse::<f64>().ok().filter(|s| s.is_finite())?;

    let whole = seconds.floor();
    let mut secs = whole as i64;
    let mut nanos = ((seconds - whole) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs = secs.checked_add(1)?;
        nanos = 0;
    }
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_accepted_forms() {
        let midnight = utc("2024-01-01T00:00:00+00:00");

        for input in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:00.000Z",
            "2024-01-01T00:00:00z",
            "2024-01-01T00:00:00+00:00",
            "2024-01-01T00:00:00+0000",
            "2024-01-01T01:00:00+01:00",
            "2023-12-31T19:00:00-0500",
            "2024-01-01 00:00:00Z",
            "2024-01-01 00:00:00.000+00:00",
            "2024-01-01T00:00:00",
            "2024-01-01 00:00:00.000000",
            "2024-01-01T00:00Z",
            "2024-01-01 00:00+00:00",
            "2024-01-01T00:00",
            "2024-01-01 00:00",
            "2024-01-01T00:00:00+00",
            "2023-12-31T19:00:00-05",
            "2024-01-01T05:30+05:30",
            "2024-01-01",
            "1704067200",
            "1704067200.0",
        ] {
            assert_eq!(parse_timestamp(input), Ok(midnight), "{input}");
        }
    }

    #[test]
    fn test_fractional_epoch() {
        let ts = parse_timestamp("1704067200.25").unwrap();
        assert_eq!(ts.timestamp(), 1704067200);
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_rejected_forms() {
        for input in [
            "",
            "not-a-date",
            "2024-13-01T00:00:00Z",
            "NaN",
            "inf",
            "2024-01-01T00:00:00+5",
            "2024-01-32",
        ] {
            assert_eq!(
                parse_timestamp(input),
                Err(TimestampError {
                    value: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format_timestamp(&utc("2024-01-01T00:00:00.000Z")),
            "2024-01-01T00:00:00Z"
        );
        assert_eq!(
            format_timestamp(&utc("2024-01-01T00:00:00.5Z")),
            "2024-01-01T00:00:00.500Z"
        );
    }
}
