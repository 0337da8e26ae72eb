//! Time utilities: the fixed service timestamp format, rounding, minute formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Fixed, fractional-second-free UTC format used by the context service.
pub const SK_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Length of a timestamp in the service format.
const SK_DATE_LEN: usize = 20;

/// Parse a timestamp in the exact service format.
///
/// Input must format back unchanged: unpadded fields, leading blanks and
/// signed years are rejected.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.len() != SK_DATE_LEN {
        return None;
    }
    let ts = NaiveDateTime::parse_from_str(s, SK_DATE_FORMAT)
        .ok()?
        .and_utc();
    (format_timestamp(&ts) == s).then_some(ts)
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(SK_DATE_FORMAT).to_string()
}

/// Parse a user-supplied timestamp, failing with `InvalidTimestamp`.
pub fn parse_timestamp_arg(s: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_timestamp_arg(s)).transpose()
}

/// Current instant, truncated to whole seconds like the wire format.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Round half away from zero to `precision` decimals.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// serde helpers for `DateTime<Utc>` in the service format.
pub mod sk_format {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }

    pub mod option {
        use super::super::{format_timestamp, parse_timestamp};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => s.serialize_str(&format_timestamp(ts)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(d)? {
                None => Ok(None),
                Some(raw) if raw.is_empty() => Ok(None),
                Some(raw) => parse_timestamp(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'"))),
            }
        }
    }
}
