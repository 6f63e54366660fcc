use serde::{Deserialize, Serialize};

/// Machine readable category of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidParameter,
    UnknownUser,
    MalformedTimestamp,
    AnchorNotFound,
    InvalidRadius,
    ScrollExceedsEnd,
    ScrollExceedsStart,
}

/// Body of a 400 response.
///
/// The optional fields let a client retry with a corrected
/// `log_appearance_limit` without another round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_logs_amount: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_log_appearance_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolling_steps_to_end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolling_steps_to_start: Option<i64>,
}

impl FailureBody {
    pub fn new(kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind,
            user_logs_amount: None,
            anchor_index: None,
            max_log_appearance_limit: None,
            scrolling_steps_to_end: None,
            scrolling_steps_to_start: None,
        }
    }
}
