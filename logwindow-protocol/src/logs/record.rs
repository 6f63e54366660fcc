use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::{LogTimestamp, TimestampError};

/// A single entry of the log dataset.
///
/// Only `user_id` and `timestamp` are interpreted; every other field of the
/// source object is carried through untouched in `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub user_id: String,
    pub timestamp: LogTimestamp,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl LogRecord {
    pub fn new(user_id: impl Into<String>, timestamp: LogTimestamp) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            payload: Map::new(),
        }
    }

    /// Convenience constructor parsing the timestamp text.
    pub fn parse(user_id: impl Into<String>, timestamp: &str) -> Result<Self, TimestampError> {
        Ok(Self::new(user_id, LogTimestamp::parse(timestamp)?))
    }

    /// Insert/override an opaque payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
