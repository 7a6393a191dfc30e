//! Split a date range into consecutive week windows aligned to the range start.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A contiguous span of at most seven days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl WeekWindow {
    /// Every date in `[week_start, week_end]`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.week_end;
        self.week_start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.week_end - self.week_start).num_days() + 1
    }
}

/// Lazy sequence of [`WeekWindow`]s produced by [`partition`].
///
/// The iterator is `Clone`, and calling [`partition`] again with the same
/// bounds recomputes the same windows.
#[derive(Debug, Clone)]
pub struct Weeks {
    cursor: Option<NaiveDate>,
    range_end: NaiveDate,
}

impl Iterator for Weeks {
    type Item = WeekWindow;

    fn next(&mut self) -> Option<WeekWindow> {
        let cursor = self.cursor?;
        // Strict: a cursor sitting on range_end emits nothing.
        if cursor >= self.range_end {
            self.cursor = None;
            return None;
        }

        let week_end = cursor
            .checked_add_days(Days::new(6))
            .map_or(self.range_end, |d| d.min(self.range_end));
        self.cursor = cursor.checked_add_days(Days::new(7));

        Some(WeekWindow {
            week_start: cursor,
            week_end,
        })
    }
}

/// Partition `[range_start, range_end]` into week windows.
///
/// Starting at `range_start`, each window is `(cursor, min(cursor + 6 days,
/// range_end))` and the cursor advances seven days while `cursor < range_end`.
/// A zero-length range (`range_start == range_end`) yields no windows.
pub fn partition(range_start: NaiveDate, range_end: NaiveDate) -> Weeks {
    Weeks {
        cursor: Some(range_start),
        range_end,
    }
}
