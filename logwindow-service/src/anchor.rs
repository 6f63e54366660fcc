use logwindow_protocol::logs::{LogRecord, LogTimestamp};

use crate::error::WindowError;

/// Locates the anchor of `reference` inside a user's view.
///
/// Returns the index just before the first record strictly later than the
/// reference: `-1` when every record is later. A reference later than or
/// equal to every record has no anchor and yields `AnchorNotFound`.
pub fn locate(view: &[&LogRecord], reference: &str) -> Result<i64, WindowError> {
    let reference = LogTimestamp::parse(reference).map_err(|_| WindowError::MalformedTimestamp {
        raw: reference.to_string(),
    })?;
    locate_at(view, &reference)
}

fn locate_at(view: &[&LogRecord], reference: &LogTimestamp) -> Result<i64, WindowError> {
    let first_later = view
        .iter()
        .position(|record| record.timestamp > *reference)
        .ok_or_else(|| WindowError::AnchorNotFound {
            reference: reference.to_string(),
        })?;

    Ok(first_later as i64 - 1)
}
