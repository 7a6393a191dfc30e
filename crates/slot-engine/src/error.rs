//! Error types for slot-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid work hours: start {start}:00 must be before end {end}:00")]
    InvalidHours { start: u32, end: u32 },

    #[error("Work hour out of range (0-23): {0}")]
    HourOutOfRange(u32),

    #[error("Minimum slot duration must not be negative: {0} minutes")]
    NegativeMinSlot(i64),

    #[error("At least one work day is required")]
    NoWorkDays,

    #[error("Invalid weekday index (0=Monday .. 6=Sunday): {0}")]
    InvalidWeekday(u8),

    #[error("Unknown weekday name: '{0}'")]
    UnknownWeekday(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Event parse error: {0}")]
    EventParse(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event source error: {0}")]
    EventSource(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
