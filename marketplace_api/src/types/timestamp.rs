//! Lenient timestamp parsing for `created_at`/`updated_at` fields.
//!
//! The API mixes RFC 3339 strings with naive `YYYY-MM-DD HH:MM:SS` values
//! (taken as UTC). Anything unparseable becomes `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_supported_formats() {
        let rfc = parse("2024-03-01T10:15:00+01:00").unwrap();
        assert_eq!(rfc.hour(), 9);

        let naive = parse("2024-03-01 10:15:00").unwrap();
        assert_eq!(naive.hour(), 10);

        let fractional = parse("2024-03-01T10:15:00.123").unwrap();
        assert_eq!(fractional.minute(), 15);

        let date_only = parse("2024-03-01").unwrap();
        assert_eq!(date_only.day(), 1);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("hier").is_none());
        assert!(parse("").is_none());
    }
}
