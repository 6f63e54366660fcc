use logwindow_protocol::logs::{FailureBody, FailureKind};
use thiserror::Error;

use crate::window::ScrollBudget;

/// Request-level failures of the windowing core.
///
/// Every variant is a deterministic function of the dataset and the request,
/// so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("Invalid user_id ({user_id})")]
    UnknownUser { user_id: String },

    #[error("invalid anchor_timestamp ({raw})")]
    MalformedTimestamp { raw: String },

    #[error("no log is later than anchor_timestamp ({reference})")]
    AnchorNotFound { reference: String },

    #[error("log_appearance_limit < 0 is invalid (got {radius})")]
    InvalidRadius { radius: i64 },

    #[error(
        "Only {} logs to scroll forward, please decrease the log_appearance_limit",
        .budget.steps_to_end
    )]
    ScrollExceedsEnd {
        view_length: usize,
        effective_index: i64,
        budget: ScrollBudget,
    },

    #[error(
        "Only {} logs to scroll backward, please decrease the log_appearance_limit",
        .budget.steps_to_start
    )]
    ScrollExceedsStart {
        view_length: usize,
        effective_index: i64,
        budget: ScrollBudget,
    },
}

impl WindowError {
    pub fn kind(&self) -> FailureKind {
        match self {
            WindowError::UnknownUser { .. } => FailureKind::UnknownUser,
            WindowError::MalformedTimestamp { .. } => FailureKind::MalformedTimestamp,
            WindowError::AnchorNotFound { .. } => FailureKind::AnchorNotFound,
            WindowError::InvalidRadius { .. } => FailureKind::InvalidRadius,
            WindowError::ScrollExceedsEnd { .. } => FailureKind::ScrollExceedsEnd,
            WindowError::ScrollExceedsStart { .. } => FailureKind::ScrollExceedsStart,
        }
    }

    /// Largest radius that would have been accepted for the same scroll.
    pub fn max_radius(&self) -> Option<i64> {
        match self {
            WindowError::ScrollExceedsEnd { budget, .. } => Some(budget.steps_to_end),
            WindowError::ScrollExceedsStart { budget, .. } => Some(budget.steps_to_start),
            _ => None,
        }
    }

    pub fn to_failure_body(&self) -> FailureBody {
        let mut body = FailureBody::new(self.kind(), self.to_string());

        if let WindowError::ScrollExceedsEnd {
            view_length,
            effective_index,
            budget,
        }
        | WindowError::ScrollExceedsStart {
            view_length,
            effective_index,
            budget,
        } = self
        {
            body.user_logs_amount = Some(*view_length);
            body.anchor_index = Some(*effective_index);
            body.max_log_appearance_limit = self.max_radius();
            body.scrolling_steps_to_end = Some(budget.steps_to_end);
            body.scrolling_steps_to_start = Some(budget.steps_to_start);
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_failure_body_carries_budget() {
        let err = WindowError::ScrollExceedsEnd {
            view_length: 5,
            effective_index: 4,
            budget: ScrollBudget {
                steps_to_end: 0,
                steps_to_start: 5,
            },
        };

        let body = err.to_failure_body();
        assert_eq!(body.kind, FailureKind::ScrollExceedsEnd);
        assert_eq!(
            body.error,
            "Only 0 logs to scroll forward, please decrease the log_appearance_limit"
        );
        assert_eq!(body.user_logs_amount, Some(5));
        assert_eq!(body.anchor_index, Some(4));
        assert_eq!(body.max_log_appearance_limit, Some(0));
        assert_eq!(body.scrolling_steps_to_start, Some(5));
    }

    #[test]
    fn lookup_failures_have_no_budget() {
        let body = WindowError::UnknownUser {
            user_id: "ghost".into(),
        }
        .to_failure_body();
        assert_eq!(body.kind, FailureKind::UnknownUser);
        assert_eq!(body.error, "Invalid user_id (ghost)");
        assert!(body.max_log_appearance_limit.is_none());
        assert!(body.user_logs_amount.is_none());
    }
}
