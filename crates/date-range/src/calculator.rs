//! Deterministic date-range computation.
//!
//! Every function here takes the reference date explicitly; nothing reads the
//! system clock. Calendar quarters are the fixed blocks Jan–Mar, Apr–Jun,
//! Jul–Sep and Oct–Dec. Fiscal calendars are not supported.
//!
//! # Functions
//!
//! - [`compute`] — Boundaries for a [`RangeSelector`] relative to a reference date
//! - [`compute_index`] — Same, from a raw menu index
//! - [`quarter_start`] — First day of the calendar quarter containing a date
//! - [`quarter_of`] — Calendar quarter number (1–4) of a date

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::boundary::DateBoundary;
use crate::error::{RangeError, Result};
use crate::range::RangeSelector;

// ── compute ─────────────────────────────────────────────────────────────────

/// Compute the date boundaries of `selector` relative to `reference`.
///
/// | Selector | Result |
/// |---|---|
/// | `Last7Days` | since `reference − 7 days` |
/// | `Last30Days` | since `reference − 30 days` |
/// | `LastQuarter` | `[start of previous quarter, start of current quarter)` |
/// | `LastYear` | `[Jan 1 of previous year, Jan 1 of this year)` |
/// | `YearToDate` | since Jan 1 of this year |
/// | `QuarterToDate` | since start of current quarter |
///
/// # Errors
///
/// Returns [`RangeError::DateOutOfRange`] only when the result would fall
/// outside chrono's representable dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_range::{compute, DateBoundary, RangeSelector};
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
/// let qtd = compute(RangeSelector::QuarterToDate, today).unwrap();
/// assert_eq!(
///     qtd,
///     DateBoundary::Since { since: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap() }
/// );
/// ```
pub fn compute(selector: RangeSelector, reference: NaiveDate) -> Result<DateBoundary> {
    let boundary = match selector {
        RangeSelector::Last7Days => DateBoundary::Since {
            since: days_before(reference, 7)?,
        },
        RangeSelector::Last30Days => DateBoundary::Since {
            since: days_before(reference, 30)?,
        },
        RangeSelector::LastQuarter => {
            let end = quarter_start(reference)?;
            let start = end
                .checked_sub_months(Months::new(3))
                .ok_or_else(|| out_of_range("quarter before", end))?;
            DateBoundary::Between { start, end }
        }
        RangeSelector::LastYear => DateBoundary::Between {
            start: year_start(reference.year() - 1)?,
            end: year_start(reference.year())?,
        },
        RangeSelector::YearToDate => DateBoundary::Since {
            since: year_start(reference.year())?,
        },
        RangeSelector::QuarterToDate => DateBoundary::Since {
            since: quarter_start(reference)?,
        },
    };
    Ok(boundary)
}

/// Compute boundaries from a raw menu index.
///
/// # Errors
///
/// Returns [`RangeError::UnsupportedRange`] if `index` is not a menu position.
pub fn compute_index(index: i64, reference: NaiveDate) -> Result<DateBoundary> {
    compute(RangeSelector::try_from(index)?, reference)
}

// ── Quarter arithmetic ──────────────────────────────────────────────────────

/// Calendar quarter (1–4) containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() + 2) / 3
}

/// First day of the calendar quarter containing `date`.
///
/// The day is forced to 1 before the month changes, so no clamping is ever
/// needed.
pub fn quarter_start(date: NaiveDate) -> Result<NaiveDate> {
    let first_month = quarter_of(date) * 3 - 2;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1)
        .ok_or_else(|| out_of_range("start of quarter for", date))
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn year_start(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| RangeError::DateOutOfRange(format!("January 1st of year {year}")))
}

fn days_before(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| out_of_range(&format!("{days} days before"), date))
}

fn out_of_range(what: &str, date: NaiveDate) -> RangeError {
    RangeError::DateOutOfRange(format!("{what} {date}"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
