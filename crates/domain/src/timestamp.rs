//! Timestamp handling shared by every layer.
//!
//! On the wire a timestamp is ISO-8601 in UTC with microsecond precision and a
//! literal `Z` suffix, e.g. `2024-11-02T12:00:00.123456Z`. Incoming values are
//! accepted in any RFC 3339 form, normalised to UTC and truncated to
//! microseconds.

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current UTC time truncated to microseconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Timestamp for a record that is being modified.
///
/// Always strictly later than `previous`, even when the wall clock has not
/// advanced by a full microsecond since the last write.
pub fn refreshed(previous: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous.trunc_subsecs(6) + TimeDelta::microseconds(1);
    now().max(floor)
}

/// Render a timestamp in the wire format.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `#[serde(with = "domain::timestamp::iso_micros")]`
pub mod iso_micros {
    use super::*;

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer).map(|ts| ts.trunc_subsecs(6))
    }
}

/// Serializes a list of timestamps in the wire format.
pub fn serialize_all<S>(values: &[DateTime<Utc>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(format))
}
