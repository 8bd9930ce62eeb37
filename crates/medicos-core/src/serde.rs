// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer, Serializer, de::Error as DeError};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse an RFC 3339 timestamp, or a naive ISO date-time taken as UTC.
pub fn parse_datetime_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Deserialize a client-supplied date-time; see [`parse_datetime_utc`].
pub fn from_datetime_lenient<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    parse_datetime_utc(&raw)
        .ok_or_else(|| DeError::custom(format!("invalid date-time: {raw}")))
}
