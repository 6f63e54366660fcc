use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// chrono rendition of `%Y-%m-%d %H:%M:%S.%f`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const DATE_TIME_LEN: usize = "YYYY-MM-DD HH:MM:SS".len();
const MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp `{0}` does not match the format %Y-%m-%d %H:%M:%S.%f")]
    Malformed(String),
}

/// Log moment with microsecond precision.
///
/// The source text is kept so responses echo timestamps exactly as they
/// appeared in the dataset; ordering and equality use the parsed instant.
#[derive(Debug, Clone)]
pub struct LogTimestamp {
    instant: NaiveDateTime,
    raw: String,
}

impl LogTimestamp {
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let malformed = || TimestampError::Malformed(raw.to_string());

        let (date_time, fraction) = raw.rsplit_once('.').ok_or_else(malformed)?;
        if !has_date_time_layout(date_time)
            || fraction.is_empty()
            || fraction.len() > MAX_FRACTION_DIGITS
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let instant =
            NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|_| malformed())?;

        // Year 0 and leap seconds parse in chrono but are not valid log moments.
        if instant.year() < 1 || instant.nanosecond() >= 1_000_000_000 {
            return Err(malformed());
        }

        Ok(Self {
            instant,
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// `YYYY-MM-DD HH:MM:SS` with ASCII digits in every numeric position.
fn has_date_time_layout(date_time: &str) -> bool {
    date_time.len() == DATE_TIME_LEN
        && date_time.bytes().enumerate().all(|(position, byte)| match position {
            4 | 7 => byte == b'-',
            10 => byte == b' ',
            13 | 16 => byte == b':',
            _ => byte.is_ascii_digit(),
        })
}

impl PartialEq for LogTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for LogTimestamp {}

impl PartialOrd for LogTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for LogTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for LogTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for LogTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LogTimestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
