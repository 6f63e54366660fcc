use serde::{Deserialize, Serialize};

use super::record::LogRecord;

/// Successful body of `GET /show-logs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowLogsResponse {
    pub user_id: String,
    pub user_logs_amount: usize,
    pub anchor_index: i64,
    pub scrolling_steps_to_end: i64,
    pub scrolling_steps_to_start: i64,
    pub log_appearance_limit: i64,
    pub current_scrolling: i64,
    pub logs: Vec<LogRecord>,
}
