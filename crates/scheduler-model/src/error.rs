//! Error types for scheduler-model operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid offset time: {0}")]
    InvalidOffsetTime(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
