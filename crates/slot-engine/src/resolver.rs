//! Compute the free intervals of a single work day.
//!
//! Busy events are swept in start order with a cursor that never moves
//! backwards, so overlapping and nested events merge without a separate
//! merge pass. Gaps shorter than the policy minimum are dropped.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::interval::{BusyEvent, TimeInterval};
use crate::policy::WorkingPolicy;

/// Find the free slots on `day` within working hours.
///
/// Returns an empty list when `day` is not a work day, lies before
/// `reference_now`'s date, or is today with working hours already over. On
/// today, the day starts no earlier than `reference_now`.
///
/// Only non-all-day events starting on `day` are considered, and each is
/// clipped to the working-hour bounds before the sweep. Events that cover no
/// time (`end <= start`) block nothing and never split a slot.
pub fn free_slots(
    day: NaiveDate,
    busy: &[BusyEvent],
    policy: &WorkingPolicy,
    reference_now: NaiveDateTime,
) -> Vec<TimeInterval> {
    if !policy.is_work_day(day) {
        return Vec::new();
    }

    let today = reference_now.date();
    if day < today {
        return Vec::new();
    }

    let (mut day_start, day_end) = policy.day_bounds(day);
    if day == today {
        day_start = day_start.max(reference_now);
        if day_start >= day_end {
            return Vec::new();
        }
    }

    let mut day_events: Vec<&BusyEvent> = busy.iter().filter(|e| e.blocks(day)).collect();
    // Stable: equal starts keep source order.
    day_events.sort_by_key(|e| e.start);

    // A minimum beyond the representable span can never be met.
    let Some(min_len) = Duration::try_minutes(policy.min_slot_minutes()) else {
        return Vec::new();
    };
    let mut slots = Vec::new();
    let mut cursor = day_start;

    for event in day_events {
        let event_start = event.start.clamp(day_start, day_end);
        let event_end = event.end.min(day_end);

        if cursor < event_start {
            push_if_long_enough(&mut slots, cursor, event_start, min_len);
        }
        cursor = cursor.max(event_end);
    }

    if cursor < day_end {
        push_if_long_enough(&mut slots, cursor, day_end, min_len);
    }

    trace!(%day, slots = slots.len(), "resolved day");
    slots
}

fn push_if_long_enough(
    slots: &mut Vec<TimeInterval>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    min_len: Duration,
) {
    if end - start >= min_len {
        slots.push(TimeInterval::new(start, end));
    }
}
