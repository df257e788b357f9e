//! # date-range
//!
//! Deterministic reporting date ranges.
//!
//! Given a reference date ("today") and one of six reporting ranges, compute
//! the date boundaries of that range and the query text that selects it. No
//! function in this crate reads the system clock except [`SystemClock`]; the
//! caller obtains today's date once and passes it in.
//!
//! ## Modules
//!
//! - [`range`] — The closed set of ranges, their menu indices and labels
//! - [`calculator`] — Range → boundary computation and calendar-quarter arithmetic
//! - [`boundary`] — Half-open and open-ended boundary values, ISO date formatting
//! - [`clock`] — Injectable source of today's date
//! - [`query`] — Query text and report values
//! - [`error`] — Error types

pub mod boundary;
pub mod calculator;
pub mod clock;
pub mod error;
pub mod query;
pub mod range;

pub use boundary::{format_date, DateBoundary, DATE_FORMAT};
pub use calculator::{compute, compute_index, quarter_of, quarter_start};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RangeError;
pub use query::{build_query, QueryOptions, Report};
pub use range::RangeSelector;
