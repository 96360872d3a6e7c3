//! Serde adapter for catalog timestamps.
//!
//! The catalog API emits naive ISO-8601 timestamps in UTC
//! (`2024-05-01T09:30:00.123456`), while snapshots written by this crate use
//! RFC 3339. Both forms are accepted; RFC 3339 is always written.
//!
//! Use with `#[serde(with = "honey_core::types::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Formats accepted for timestamps without an offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp in either RFC 3339 or naive UTC form.
///
/// # Errors
///
/// Returns the last parse error if no accepted format matches.
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => {
            for format in NAIVE_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                    return Ok(naive.and_utc());
                }
            }
            Err(rfc_err)
        }
    }
}

/// Serialize as RFC 3339 with a `Z` suffix.
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Deserialize from RFC 3339 or naive UTC.
///
/// # Errors
///
/// Fails if the value is not a string or matches no accepted format.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}
