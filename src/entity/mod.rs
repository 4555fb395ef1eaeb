mod note;

pub use note::{Note, UNTITLED};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Format a timestamp the way the slot stores it: `2025-01-31T09:15:00.250Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse any RFC 3339 timestamp into UTC, truncated to the millisecond
/// precision `format_timestamp` writes back.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
}

/// Serde adapter keeping timestamps in the slot's millisecond ISO-8601 form.
pub(crate) mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_uses_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 31, 9, 15, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-31T09:15:00.000Z");
    }

    #[test]
    fn test_parse_timestamp_accepts_offsets() {
        let ts = parse_timestamp("2025-01-31T10:15:00+01:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 1, 31, 9, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_drops_sub_millisecond_digits() {
        let ts = parse_timestamp("2024-05-01T10:00:00.123456Z").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-01T10:00:00.123Z");
        assert_eq!(parse_timestamp(&format_timestamp(&ts)), Some(ts));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
