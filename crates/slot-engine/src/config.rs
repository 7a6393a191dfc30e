//! Layered run configuration.
//!
//! Built-in defaults are overridden by an optional TOML file, which is in
//! turn overridden by command-line values. The merged [`SlotConfig`] is then
//! resolved against "today" into a validated [`WorkingPolicy`].
//!
//! ```toml
//! work_start_hour = 9
//! work_end_hour = 17
//! work_days = [0, 1, 2, 3]   # 0 = Monday
//! min_slot_minutes = 45
//! weeks = 3
//! start_date = "2026-03-16"
//! ```

use std::path::Path;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SlotError};
use crate::policy::{
    weekdays_from_indices, WorkingPolicy, ALL_DAYS, DEFAULT_MIN_SLOT_MINUTES, DEFAULT_WEEKS,
    DEFAULT_WORK_END_HOUR, DEFAULT_WORK_START_HOUR, WEEKDAYS,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlotConfig {
    pub work_start_hour: Option<u32>,
    pub work_end_hour: Option<u32>,
    /// Weekday indices, 0 = Monday .. 6 = Sunday.
    pub work_days: Option<Vec<u8>>,
    /// Shorthand for all seven days; wins over `work_days`.
    pub include_weekends: Option<bool>,
    pub min_slot_minutes: Option<i64>,
    /// Range length used when `end_date` is absent.
    pub weeks: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SlotConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Layer `overrides` on top of `self`. Set fields in `overrides` win.
    pub fn merge(self, overrides: SlotConfig) -> SlotConfig {
        SlotConfig {
            work_start_hour: overrides.work_start_hour.or(self.work_start_hour),
            work_end_hour: overrides.work_end_hour.or(self.work_end_hour),
            work_days: overrides.work_days.or(self.work_days),
            include_weekends: overrides.include_weekends.or(self.include_weekends),
            min_slot_minutes: overrides.min_slot_minutes.or(self.min_slot_minutes),
            weeks: overrides.weeks.or(self.weeks),
            start_date: overrides.start_date.or(self.start_date),
            end_date: overrides.end_date.or(self.end_date),
        }
    }

    /// Analysis range for a run happening on `today`.
    ///
    /// - both dates set: used as given
    /// - only `start_date`: ends `weeks` weeks later
    /// - neither: starts on this week's Monday, ends `weeks` weeks later
    /// - only `end_date`: starts on this week's Monday
    pub fn resolve_range(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let weeks = self.weeks.unwrap_or(DEFAULT_WEEKS);
        let start = self.start_date.unwrap_or_else(|| monday_of(today));
        let end = match self.end_date {
            Some(end) => end,
            None => start
                .checked_add_days(Days::new(u64::from(weeks) * 7))
                .ok_or_else(|| {
                    SlotError::InvalidDatetime(format!("{} + {} weeks overflows", start, weeks))
                })?,
        };
        Ok((start, end))
    }

    /// Resolve defaults and the date range, then validate into a policy.
    pub fn into_policy(self, today: NaiveDate) -> Result<WorkingPolicy> {
        let (range_start, range_end) = self.resolve_range(today)?;
        let work_days = if self.include_weekends.unwrap_or(false) {
            ALL_DAYS.to_vec()
        } else {
            match &self.work_days {
                Some(indices) => weekdays_from_indices(indices)?,
                None => WEEKDAYS.to_vec(),
            }
        };

        WorkingPolicy::new(
            self.work_start_hour.unwrap_or(DEFAULT_WORK_START_HOUR),
            self.work_end_hour.unwrap_or(DEFAULT_WORK_END_HOUR),
            work_days,
            self.min_slot_minutes.unwrap_or(DEFAULT_MIN_SLOT_MINUTES),
            range_start,
            range_end,
        )
    }
}

/// Monday of the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}
