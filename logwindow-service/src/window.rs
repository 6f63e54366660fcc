use logwindow_protocol::logs::LogRecord;

use crate::error::WindowError;

/// Remaining scroll steps toward each end of a user's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBudget {
    pub steps_to_end: i64,
    pub steps_to_start: i64,
}

impl ScrollBudget {
    /// Budget around `effective_index`. The two sides always add up to
    /// `view_length`, even when the index lies outside the view.
    pub fn at(view_length: usize, effective_index: i64) -> Self {
        let length = view_length as i64;
        let steps_to_end = length.saturating_sub(effective_index.saturating_add(1));
        Self {
            steps_to_end,
            steps_to_start: length.saturating_sub(steps_to_end),
        }
    }
}

/// Slice of a view centered on `effective_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<'v, 'a> {
    pub effective_index: i64,
    pub records: &'v [&'a LogRecord],
    pub budget: ScrollBudget,
}

/// Applies `scroll` to `anchor_index` and cuts `radius` records on each side.
///
/// Both slice ends are clamped into the view: the upper bound is clamped by
/// the sequence length, so windows near an edge come back shorter and a
/// window entirely outside the view comes back empty. Feasibility is only
/// checked in the direction of a non-zero scroll.
pub fn resolve<'v, 'a>(
    view: &'v [&'a LogRecord],
    anchor_index: i64,
    scroll: i64,
    radius: i64,
) -> Result<Window<'v, 'a>, WindowError> {
    if radius < 0 {
        return Err(WindowError::InvalidRadius { radius });
    }

    let effective_index = anchor_index.saturating_add(scroll);
    let records = clamp_slice(view, effective_index, radius);
    let budget = ScrollBudget::at(view.len(), effective_index);

    if scroll > 0 && radius > budget.steps_to_end {
        return Err(WindowError::ScrollExceedsEnd {
            view_length: view.len(),
            effective_index,
            budget,
        });
    }

    if scroll < 0 && radius > budget.steps_to_start {
        return Err(WindowError::ScrollExceedsStart {
            view_length: view.len(),
            effective_index,
            budget,
        });
    }

    Ok(Window {
        effective_index,
        records,
        budget,
    })
}

fn clamp_slice<'v, 'a>(
    view: &'v [&'a LogRecord],
    center: i64,
    radius: i64,
) -> &'v [&'a LogRecord] {
    let length = view.len() as i64;
    let lower = center.saturating_sub(radius).clamp(0, length);
    let upper = center
        .saturating_add(radius)
        .saturating_add(1)
        .clamp(lower, length);

    &view[lower as usize..upper as usize]
}
