//! Walk week windows and work days, resolve free slots, and fold totals.
//!
//! The report is plain data: presentation (weekday names, time formatting,
//! clipboard text) belongs to the caller.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::interval::{BusyEvent, TimeInterval};
use crate::policy::WorkingPolicy;
use crate::resolver::free_slots;
use crate::weeks::{partition, WeekWindow};

/// Free slots for one work day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub slots: Vec<TimeInterval>,
    /// Sum of slot lengths in whole minutes.
    pub free_minutes: i64,
}

impl DayReport {
    pub fn free_hours(&self) -> f64 {
        self.slots.iter().map(TimeInterval::hours).sum()
    }
}

/// Per-week rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    /// 1-based position within the analysis range.
    pub number: usize,
    #[serde(flatten)]
    pub window: WeekWindow,
    /// Every work day in the window, including days without slots.
    pub days: Vec<DayReport>,
    pub slot_count: usize,
    pub free_hours: f64,
}

/// Result of a full run over the policy's date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityReport {
    pub policy: WorkingPolicy,
    pub reference_now: NaiveDateTime,
    pub weeks: Vec<WeekReport>,
    pub total_slots: usize,
    pub total_free_hours: f64,
    /// `weeks × work days per week × work hours per day`.
    pub total_work_hours: f64,
    utilization_percent: Option<f64>,
}

impl AvailabilityReport {
    /// Share of working time that is already booked, in percent.
    ///
    /// `None` when there are no work hours to measure against.
    pub fn utilization_percent(&self) -> Option<f64> {
        self.utilization_percent
    }

    /// Days that have at least one free slot, in chronological order.
    pub fn days_with_slots(&self) -> impl Iterator<Item = &DayReport> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .filter(|d| !d.slots.is_empty())
    }
}

/// `100 * (1 - free / work)`, or `None` if `work` is zero.
pub fn utilization(total_free_hours: f64, total_work_hours: f64) -> Option<f64> {
    if total_work_hours > 0.0 {
        Some(100.0 * (1.0 - total_free_hours / total_work_hours))
    } else {
        None
    }
}

/// Resolve every work day of every week window in the policy's range.
///
/// `events` is the full snapshot for the range; it is grouped by start date
/// up front so each day only sees its own events.
pub fn build_report(
    events: &[BusyEvent],
    policy: &WorkingPolicy,
    reference_now: NaiveDateTime,
) -> AvailabilityReport {
    let inverted = events.iter().filter(|e| e.end < e.start).count();
    if inverted > 0 {
        warn!(count = inverted, "events end before they start; they block no time");
    }

    let mut by_day: HashMap<NaiveDate, Vec<BusyEvent>> = HashMap::new();
    for event in events.iter().filter(|e| !e.all_day) {
        by_day
            .entry(event.start_date())
            .or_default()
            .push(event.clone());
    }

    let mut weeks = Vec::new();
    let mut total_slots = 0;
    let mut total_free_hours = 0.0;

    for (index, window) in partition(policy.range_start(), policy.range_end()).enumerate() {
        let days: Vec<DayReport> = window
            .days()
            .filter(|d| policy.is_work_day(*d))
            .map(|date| {
                let busy = by_day.get(&date).map(Vec::as_slice).unwrap_or(&[]);
                let slots = free_slots(date, busy, policy, reference_now);
                let free_minutes = slots.iter().map(TimeInterval::duration_minutes).sum();
                DayReport {
                    date,
                    weekday: date.weekday(),
                    slots,
                    free_minutes,
                }
            })
            .collect();

        let slot_count: usize = days.iter().map(|d| d.slots.len()).sum();
        let free_hours: f64 = days.iter().map(DayReport::free_hours).sum();
        debug!(
            week = index + 1,
            start = %window.week_start,
            end = %window.week_end,
            slot_count,
            free_hours,
            "week resolved"
        );

        total_slots += slot_count;
        total_free_hours += free_hours;
        weeks.push(WeekReport {
            number: index + 1,
            window,
            days,
            slot_count,
            free_hours,
        });
    }

    let total_work_hours = weeks.len() as f64
        * policy.work_days().len() as f64
        * f64::from(policy.work_hours_per_day());
    let utilization_percent = utilization(total_free_hours, total_work_hours);

    info!(
        weeks = weeks.len(),
        total_slots, total_free_hours, "availability report built"
    );

    AvailabilityReport {
        policy: policy.clone(),
        reference_now,
        weeks,
        total_slots,
        total_free_hours,
        total_work_hours,
        utilization_percent,
    }
}
