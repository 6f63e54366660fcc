use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw query string of `GET /show-logs/`, exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowLogsQuery {
    pub anchor_timestamp: Option<String>,
    pub user_id: Option<String>,
    pub log_appearance_limit: Option<String>,
    pub scrolling: Option<String>,
}

/// Rejection produced while turning a [`ShowLogsQuery`] into a [`WindowRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("missing required query parameter `{0}`")]
    Missing(&'static str),
    #[error("query parameter `{name}` must be an integer, got `{value}`")]
    NotAnInteger { name: &'static str, value: String },
}

/// Typed request handed to the windowing core.
///
/// `radius` stays signed so a negative `log_appearance_limit` reaches the
/// core and is reported as an invalid radius rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub user_id: String,
    pub anchor_timestamp: String,
    pub radius: i64,
    pub scroll: i64,
}

impl WindowRequest {
    pub fn new(
        user_id: impl Into<String>,
        anchor_timestamp: impl Into<String>,
        radius: i64,
        scroll: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            anchor_timestamp: anchor_timestamp.into(),
            radius,
            scroll,
        }
    }
}

impl TryFrom<ShowLogsQuery> for WindowRequest {
    type Error = ParameterError;

    fn try_from(query: ShowLogsQuery) -> Result<Self, Self::Error> {
        let user_id = query.user_id.ok_or(ParameterError::Missing("user_id"))?;
        let anchor_timestamp = query
            .anchor_timestamp
            .ok_or(ParameterError::Missing("anchor_timestamp"))?;
        let radius = parse_integer("log_appearance_limit", query.log_appearance_limit)?;
        let scroll = parse_integer("scrolling", query.scrolling)?;

        Ok(Self {
            user_id,
            anchor_timestamp,
            radius,
            scroll,
        })
    }
}

impl From<&WindowRequest> for ShowLogsQuery {
    fn from(request: &WindowRequest) -> Self {
        Self {
            anchor_timestamp: Some(request.anchor_timestamp.clone()),
            user_id: Some(request.user_id.clone()),
            log_appearance_limit: Some(request.radius.to_string()),
            scrolling: Some(request.scroll.to_string()),
        }
    }
}

fn parse_integer(name: &'static str, value: Option<String>) -> Result<i64, ParameterError> {
    let value = value.ok_or(ParameterError::Missing(name))?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParameterError::NotAnInteger { name, value })
}
