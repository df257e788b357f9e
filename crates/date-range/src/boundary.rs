//! The result of a range computation and its textual form.

use chrono::NaiveDate;
use serde::Serialize;

/// `strftime` pattern for boundary dates (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date boundaries for a reporting range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateBoundary {
    /// Half-open interval `[start, end)`.
    Between { start: NaiveDate, end: NaiveDate },
    /// Everything from `since` up to now.
    Since { since: NaiveDate },
}

impl DateBoundary {
    /// The lower bound, present for both variants.
    pub fn start(&self) -> NaiveDate {
        match *self {
            DateBoundary::Between { start, .. } => start,
            DateBoundary::Since { since } => since,
        }
    }

    /// The exclusive upper bound, if the range is closed.
    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            DateBoundary::Between { end, .. } => Some(end),
            DateBoundary::Since { .. } => None,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, DateBoundary::Since { .. })
    }

    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DateBoundary::Between { start, end } => start <= date && date < end,
            DateBoundary::Since { since } => date >= since,
        }
    }
}

/// Render a date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
