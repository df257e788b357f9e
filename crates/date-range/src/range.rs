//! The closed set of reporting ranges offered to the user.
//!
//! [`RangeSelector::ALL`] is the only list of ranges in the workspace. The menu
//! is printed from it and raw menu indices are validated against it, so a new
//! range is added in exactly one place and the calculator's `match` refuses to
//! build until it handles the new variant.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RangeError;

/// A reporting range, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeSelector {
    /// The seven days before the reference date, open-ended.
    Last7Days,
    /// The thirty days before the reference date, open-ended.
    Last30Days,
    /// The calendar quarter before the one containing the reference date.
    LastQuarter,
    /// The calendar year before the reference date's year.
    LastYear,
    /// From January 1st of the reference year, open-ended.
    YearToDate,
    /// From the first day of the current calendar quarter, open-ended.
    QuarterToDate,
}

impl RangeSelector {
    /// Every range, indexed by its menu position.
    pub const ALL: [RangeSelector; 6] = [
        RangeSelector::Last7Days,
        RangeSelector::Last30Days,
        RangeSelector::LastQuarter,
        RangeSelector::LastYear,
        RangeSelector::YearToDate,
        RangeSelector::QuarterToDate,
    ];

    /// Position of this range in the menu.
    pub fn index(self) -> usize {
        match self {
            RangeSelector::Last7Days => 0,
            RangeSelector::Last30Days => 1,
            RangeSelector::LastQuarter => 2,
            RangeSelector::LastYear => 3,
            RangeSelector::YearToDate => 4,
            RangeSelector::QuarterToDate => 5,
        }
    }

    /// Human-readable label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            RangeSelector::Last7Days => "Last 7 Days",
            RangeSelector::Last30Days => "Last 30 Days",
            RangeSelector::LastQuarter => "Last Quarter",
            RangeSelector::LastYear => "Last Year",
            RangeSelector::YearToDate => "Year to Date",
            RangeSelector::QuarterToDate => "Quarter to Date",
        }
    }

    /// Kebab-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            RangeSelector::Last7Days => "last-7-days",
            RangeSelector::Last30Days => "last-30-days",
            RangeSelector::LastQuarter => "last-quarter",
            RangeSelector::LastYear => "last-year",
            RangeSelector::YearToDate => "year-to-date",
            RangeSelector::QuarterToDate => "quarter-to-date",
        }
    }
}

impl TryFrom<i64> for RangeSelector {
    type Error = RangeError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(RangeError::UnsupportedRange(index))
    }
}

impl FromStr for RangeSelector {
    type Err = RangeError;

    /// Accepts a menu index (`"2"`) or a range name (`"last-quarter"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Self::try_from(index);
        }
        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.name() == lower)
            .ok_or_else(|| RangeError::UnknownRangeName(trimmed.to_string()))
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
