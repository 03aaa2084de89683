//! Date handling for ServiceStack JSON.
//!
//! ServiceStack writes `DateTime` values as ISO-8601 timestamps without an
//! offset and with up to seven fractional digits
//! (`2015-01-01T17:33:58.9892560`). Older services, or ones configured for
//! WCF-style dates, emit `/Date(1420133638989)/` instead. Both forms are
//! accepted; values with an explicit offset are normalized to UTC.
//!
//! Use the submodules with `#[serde(with = "...")]`:
//!
//! ```
//! use chrono::NaiveDateTime;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Audit {
//!     #[serde(default, with = "servicestack_client::dates::option")]
//!     created: Option<NaiveDateTime>,
//! }
//!
//! let audit: Audit = serde_json::from_str(r#"{"created":"/Date(0)/"}"#).unwrap();
//! assert_eq!(audit.created.unwrap().to_string(), "1970-01-01 00:00:00");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse any date representation ServiceStack is known to emit.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Some(inner) = value
        .strip_prefix("/Date(")
        .and_then(|rest| rest.strip_suffix(")/"))
    {
        return parse_wcf_millis(inner);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, ISO_FORMAT) {
        return Some(naive);
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Format a timestamp the way ServiceStack writes it.
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format(ISO_FORMAT).to_string()
}

/// `1420133638989`, `1420133638989+0000` or `-1000-0500`.
fn parse_wcf_millis(inner: &str) -> Option<NaiveDateTime> {
    // The offset suffix is informational; the millis are always UTC.
    let digits_end = inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map_or(inner.len(), |(i, _)| i);

    let millis: i64 = inner[..digits_end].parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Serde adapter for required `NaiveDateTime` fields.
pub mod required {
    use super::{Deserialize, Deserializer, NaiveDateTime, Serializer, format_date, parse_date};
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Serde adapter for optional `NaiveDateTime` fields.
pub mod option {
    use super::{Deserialize, Deserializer, NaiveDateTime, Serializer, format_date, parse_date};
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&format_date(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
            None => Ok(None),
        }
    }
}
