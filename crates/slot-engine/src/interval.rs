//! Time intervals and busy events.
//!
//! All timestamps are naive wall-clock times in a single local civil calendar.
//! Nothing in this crate converts between timezones.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open span of wall-clock time, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Available time returned by the resolver.
pub type FreeSlot = TimeInterval;

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Signed length of the interval. Negative when `end < start`.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length in whole minutes, truncated toward zero.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Length in fractional hours.
    pub fn hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// True when the interval spans no time at all (or runs backwards).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Restrict both bounds to `[lo, hi]`.
    pub fn clip(&self, lo: NaiveDateTime, hi: NaiveDateTime) -> TimeInterval {
        TimeInterval {
            start: self.start.clamp(lo, hi),
            end: self.end.clamp(lo, hi),
        }
    }
}

/// A calendar event that may block time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// All-day events never block a slot.
    #[serde(default)]
    pub all_day: bool,
}

impl BusyEvent {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: None,
            start,
            end,
            all_day: false,
        }
    }

    pub fn all_day(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: None,
            start,
            end,
            all_day: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    /// Calendar date the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether the event should be treated as blocking time on `day`.
    ///
    /// Only timed events that cover some time are considered, and only on the
    /// day they start.
    pub fn blocks(&self, day: NaiveDate) -> bool {
        !self.all_day && self.start < self.end && self.start.date() == day
    }
}
