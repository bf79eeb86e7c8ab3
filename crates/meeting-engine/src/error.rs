//! Error types for meeting-engine operations.
//!
//! The resolver itself never fails: an impossible meeting is an empty result.
//! Errors only arise when building ranges or reading a JSON schedule.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Time range [{start}, {end}) extends past the end of the day")]
    OutOfDay { start: u32, end: u32 },

    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
