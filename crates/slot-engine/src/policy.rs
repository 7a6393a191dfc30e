//! Working-time policy: hours, work days, minimum slot length, analysis range.
//!
//! A [`WorkingPolicy`] is validated once at construction and is read-only
//! afterwards. Every resolver and reporter call takes it by reference.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{Result, SlotError};

pub const DEFAULT_WORK_START_HOUR: u32 = 8;
pub const DEFAULT_WORK_END_HOUR: u32 = 19;
pub const DEFAULT_MIN_SLOT_MINUTES: i64 = 30;
pub const DEFAULT_WEEKS: u32 = 2;

/// Monday through Friday.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Every day of the week, Monday first.
pub const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingPolicy {
    work_start_hour: u32,
    work_end_hour: u32,
    /// Deduplicated, Monday-first.
    work_days: Vec<Weekday>,
    min_slot_minutes: i64,
    range_start: NaiveDate,
    range_end: NaiveDate,
    #[serde(skip)]
    work_start: NaiveTime,
    #[serde(skip)]
    work_end: NaiveTime,
}

impl WorkingPolicy {
    /// Build a validated policy.
    ///
    /// # Errors
    /// - `HourOutOfRange` if either hour is above 23.
    /// - `InvalidHours` if `work_start_hour >= work_end_hour`.
    /// - `NegativeMinSlot` if `min_slot_minutes < 0`.
    /// - `NoWorkDays` if `work_days` is empty.
    /// - `InvalidRange` if `range_start > range_end`.
    pub fn new(
        work_start_hour: u32,
        work_end_hour: u32,
        work_days: impl IntoIterator<Item = Weekday>,
        min_slot_minutes: i64,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Self> {
        let work_start = hour_to_time(work_start_hour)?;
        let work_end = hour_to_time(work_end_hour)?;
        if work_start_hour >= work_end_hour {
            return Err(SlotError::InvalidHours {
                start: work_start_hour,
                end: work_end_hour,
            });
        }
        if min_slot_minutes < 0 {
            return Err(SlotError::NegativeMinSlot(min_slot_minutes));
        }

        let requested: Vec<Weekday> = work_days.into_iter().collect();
        let work_days: Vec<Weekday> = ALL_DAYS
            .iter()
            .copied()
            .filter(|d| requested.contains(d))
            .collect();
        if work_days.is_empty() {
            return Err(SlotError::NoWorkDays);
        }

        if range_start > range_end {
            return Err(SlotError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }

        Ok(Self {
            work_start_hour,
            work_end_hour,
            work_days,
            min_slot_minutes,
            range_start,
            range_end,
            work_start,
            work_end,
        })
    }

    pub fn work_start_hour(&self) -> u32 {
        self.work_start_hour
    }

    pub fn work_end_hour(&self) -> u32 {
        self.work_end_hour
    }

    pub fn work_days(&self) -> &[Weekday] {
        &self.work_days
    }

    pub fn min_slot_minutes(&self) -> i64 {
        self.min_slot_minutes
    }

    pub fn range_start(&self) -> NaiveDate {
        self.range_start
    }

    pub fn range_end(&self) -> NaiveDate {
        self.range_end
    }

    /// True iff the date's weekday is one of the policy's work days.
    pub fn is_work_day(&self, date: NaiveDate) -> bool {
        self.work_days.contains(&date.weekday())
    }

    pub fn work_hours_per_day(&self) -> u32 {
        self.work_end_hour - self.work_start_hour
    }

    /// Working-hour bounds for `date`, ignoring any "now" cutoff.
    pub fn day_bounds(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.work_start), date.and_time(self.work_end))
    }

    /// Every date in `[range_start, range_end]`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.range_start
            .iter_days()
            .take_while(move |d| *d <= self.range_end)
    }
}

fn hour_to_time(hour: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or(SlotError::HourOutOfRange(hour))
}

/// Map weekday indices (0=Monday .. 6=Sunday) to [`Weekday`]s.
///
/// # Errors
/// Returns `SlotError::InvalidWeekday` for any index above 6.
pub fn weekdays_from_indices(indices: &[u8]) -> Result<Vec<Weekday>> {
    indices
        .iter()
        .map(|&i| {
            ALL_DAYS
                .get(usize::from(i))
                .copied()
                .ok_or(SlotError::InvalidWeekday(i))
        })
        .collect()
}

/// Parse a weekday name or abbreviation ("mon", "Tuesday", "sun").
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| SlotError::UnknownWeekday(name.trim().to_string()))
}
