//! Error types for day-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

pub type Result<T> = std::result::Result<T, DayError>;
