//! # slot-engine
//!
//! Free meeting slot computation for a calendar snapshot and a working-time
//! policy.
//!
//! Given busy events and a [`WorkingPolicy`] (work hours, work days, minimum
//! slot length, analysis range), the engine finds the free intervals inside
//! working hours for each work day and groups them by week. Times are naive
//! wall-clock values in one local calendar; recurrence expansion and timezone
//! conversion happen before events reach this crate.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{free_slots, BusyEvent, WorkingPolicy, WEEKDAYS};
//!
//! let tue = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
//! let policy = WorkingPolicy::new(8, 19, WEEKDAYS, 30, tue, tue).unwrap();
//! let busy = vec![BusyEvent::new(
//!     tue.and_hms_opt(10, 0, 0).unwrap(),
//!     tue.and_hms_opt(11, 15, 0).unwrap(),
//! )];
//! let now = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let slots = free_slots(tue, &busy, &policy, now);
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].duration_minutes(), 120); // 08:00-10:00
//! assert_eq!(slots[1].duration_minutes(), 465); // 11:15-19:00
//! ```
//!
//! ## Modules
//!
//! - [`policy`] — validated working-time policy
//! - [`weeks`] — date range → week windows
//! - [`resolver`] — one day's busy events → free slots
//! - [`report`] — per-day, per-week, and total statistics
//! - [`config`] — defaults + TOML + overrides → policy
//! - [`source`] — calendar event sources (in-memory, JSON)
//! - [`interval`] — time intervals and busy events
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod interval;
pub mod policy;
pub mod report;
pub mod resolver;
pub mod source;
pub mod weeks;

pub use config::SlotConfig;
pub use error::SlotError;
pub use interval::{BusyEvent, FreeSlot, TimeInterval};
pub use policy::{WorkingPolicy, ALL_DAYS, WEEKDAYS};
pub use report::{build_report, AvailabilityReport, DayReport, WeekReport};
pub use resolver::free_slots;
pub use source::{CalendarEventSource, JsonEventSource, SnapshotSource};
pub use weeks::{partition, WeekWindow, Weeks};
