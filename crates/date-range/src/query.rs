//! Query text for a computed range.
//!
//! Intervals become `between 'start' and 'end'`, open-ended ranges become
//! `> 'since'`. Dates are rendered with [`format_date`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::boundary::{format_date, DateBoundary};
use crate::calculator::compute;
use crate::error::Result;
use crate::range::RangeSelector;

/// Table and column the generated query filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    pub table: String,
    pub column: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            table: "interesting_data".to_string(),
            column: "last_updated".to_string(),
        }
    }
}

/// Build the query text selecting rows whose column falls in `boundary`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_range::{build_query, DateBoundary, QueryOptions};
///
/// let since = DateBoundary::Since { since: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() };
/// assert_eq!(
///     build_query(&since, &QueryOptions::default()),
///     "select * from interesting_data where last_updated > '2024-01-01'"
/// );
/// ```
pub fn build_query(boundary: &DateBoundary, options: &QueryOptions) -> String {
    let condition = match *boundary {
        DateBoundary::Between { start, end } => format!(
            "between '{}' and '{}'",
            format_date(start),
            format_date(end)
        ),
        DateBoundary::Since { since } => format!("> '{}'", format_date(since)),
    };
    format!(
        "select * from {} where {} {}",
        options.table, options.column, condition
    )
}

/// Everything known about one generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Menu index of the range.
    pub index: usize,
    /// Kebab-case range name.
    pub range: &'static str,
    /// Menu label of the range.
    pub label: &'static str,
    /// The "today" the range was computed from.
    pub reference_date: NaiveDate,
    pub boundary: DateBoundary,
    pub query: String,
}

impl Report {
    /// Compute the range for `selector` and build its query.
    pub fn generate(
        selector: RangeSelector,
        reference_date: NaiveDate,
        options: &QueryOptions,
    ) -> Result<Report> {
        let boundary = compute(selector, reference_date)?;
        Ok(Report {
            index: selector.index(),
            range: selector.name(),
            label: selector.label(),
            reference_date,
            boundary,
            query: build_query(&boundary, options),
        })
    }
}
