// crates/core/src/histogram.rs
//! Day-histogram codec: the persisted `{ "YYYY-MM-DD": minutes }` mapping.
//!
//! Stateless function pair; no shared encoder instance to guard.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::warn;

/// Decode a stored day histogram.
///
/// Blank or malformed text decodes as an empty mapping, never an error; the
/// next successful write replaces whatever was corrupt.
pub fn parse_by_day(json: &str) -> BTreeMap<String, i64> {
    if json.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str(json) {
        Ok(by_day) => by_day,
        Err(err) => {
            warn!(error = %err, "malformed day histogram, substituting empty mapping");
            BTreeMap::new()
        }
    }
}

/// Encode a day histogram for storage. An empty mapping encodes as `{}`.
pub fn encode_by_day(by_day: &BTreeMap<String, i64>) -> String {
    serde_json::to_string(by_day).unwrap_or_else(|_| "{}".to_string())
}

/// The `YYYY-MM-DD` bucket key for an instant, in UTC.
pub fn day_key(at: DateTime<Utc>) -> String {
    at.date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip() {
        let mut by_day = BTreeMap::new();
        by_day.insert("2026-08-03".to_string(), 50);
        by_day.insert("2026-08-04".to_string(), 25);
        let encoded = encode_by_day(&by_day);
        assert_eq!(parse_by_day(&encoded), by_day);
    }

    #[test]
    fn test_empty_mapping_encodes_as_braces() {
        assert_eq!(encode_by_day(&BTreeMap::new()), "{}");
    }

    #[test]
    fn test_blank_input_decodes_empty() {
        assert!(parse_by_day("").is_empty());
        assert!(parse_by_day("   ").is_empty());
    }

    #[test]
    fn test_malformed_input_decodes_empty() {
        assert!(parse_by_day("not json").is_empty());
        assert!(parse_by_day("{\"2026-08-04\": }").is_empty());
        assert!(parse_by_day("[1, 2, 3]").is_empty());
        assert!(parse_by_day("{\"2026-08-04\": \"fifty\"}").is_empty());
    }

    #[test]
    fn test_day_key_is_utc_calendar_date() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 1).unwrap();
        assert_eq!(day_key(at), "2026-08-04");
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 23, 59, 59).unwrap();
        assert_eq!(day_key(at), "2026-08-04");
    }
}
