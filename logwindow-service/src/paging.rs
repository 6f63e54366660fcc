use logwindow_protocol::logs::{LogRecord, ShowLogsResponse, WindowRequest};

use crate::anchor;
use crate::dataset::Dataset;
use crate::error::WindowError;
use crate::window::{self, ScrollBudget};

/// Outcome of a successful window lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult {
    pub user_id: String,
    pub user_logs_amount: usize,
    pub anchor_index: i64,
    pub budget: ScrollBudget,
    pub radius: i64,
    pub scroll: i64,
    pub logs: Vec<LogRecord>,
}

/// Resolves a request against the dataset.
///
/// Checks run in a fixed order: unknown user, timestamp format, anchor
/// lookup, radius, then scroll feasibility. Nothing is returned on failure.
pub fn get_window(
    dataset: &Dataset,
    request: &WindowRequest,
) -> Result<WindowResult, WindowError> {
    let view = dataset.user_view(&request.user_id);
    if view.is_empty() {
        return Err(WindowError::UnknownUser {
            user_id: request.user_id.clone(),
        });
    }

    let anchor_index = anchor::locate(&view, &request.anchor_timestamp)?;
    let window = window::resolve(&view, anchor_index, request.scroll, request.radius)?;

    Ok(WindowResult {
        user_id: request.user_id.clone(),
        user_logs_amount: view.len(),
        anchor_index: window.effective_index,
        budget: window.budget,
        radius: request.radius,
        scroll: request.scroll,
        logs: window.records.iter().map(|record| (*record).clone()).collect(),
    })
}

impl From<WindowResult> for ShowLogsResponse {
    fn from(result: WindowResult) -> Self {
        ShowLogsResponse {
            user_id: result.user_id,
            user_logs_amount: result.user_logs_amount,
            anchor_index: result.anchor_index,
            scrolling_steps_to_end: result.budget.steps_to_end,
            scrolling_steps_to_start: result.budget.steps_to_start,
            log_appearance_limit: result.radius,
            current_scrolling: result.scroll,
            logs: result.logs,
        }
    }
}
