//! Error types for date-range operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Unsupported range: {0} (expected an index between 0 and 5)")]
    UnsupportedRange(i64),

    #[error("Unknown range name: {0}")]
    UnknownRangeName(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
