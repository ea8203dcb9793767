//! Errors for the strict conversions.

use thiserror::Error;

/// Reports absence where the caller asked for a value to be present.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("value is absent")]
    Missing,
    #[error("value at index {index} is absent")]
    Absent { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
