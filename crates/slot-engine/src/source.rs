//! Calendar event sources.
//!
//! The engine never talks to a calendar store. A [`CalendarEventSource`] hands
//! it an already-fetched, already-authorized snapshot, and any failure to get
//! one aborts the run.
//!
//! JSON snapshots are either a bare array or an object with an `events` array:
//!
//! ```json
//! [
//!   {"title": "Standup", "start": "2026-03-17T10:00:00", "end": "2026-03-17T10:15:00"},
//!   {"title": "Offsite", "start": "2026-03-18", "end": "2026-03-19", "all_day": true}
//! ]
//! ```

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SlotError};
use crate::interval::BusyEvent;

/// Supplier of busy events for a time range.
pub trait CalendarEventSource {
    /// All events (all-day included) overlapping `[start, end]`, sorted by
    /// start time.
    ///
    /// # Errors
    /// Any failure to produce the snapshot. Callers propagate it as-is.
    fn events_in_range(&self, start: NaiveDateTime, end: NaiveDateTime)
        -> Result<Vec<BusyEvent>>;
}

/// An in-memory snapshot of events.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    events: Vec<BusyEvent>,
}

impl SnapshotSource {
    pub fn new(events: Vec<BusyEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CalendarEventSource for SnapshotSource {
    fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<BusyEvent>> {
        // An inverted event counts as a point at its start.
        let mut hits: Vec<BusyEvent> = self
            .events
            .iter()
            .filter(|e| e.start <= end && e.end.max(e.start) >= start)
            .cloned()
            .collect();
        hits.sort_by_key(|e| e.start);
        Ok(hits)
    }
}

/// Events parsed from a JSON snapshot.
#[derive(Debug, Clone, Default)]
pub struct JsonEventSource {
    inner: SnapshotSource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<EventRecord>),
    Wrapped { events: Vec<EventRecord> },
}

#[derive(Deserialize)]
struct EventRecord {
    #[serde(default)]
    title: Option<String>,
    start: String,
    end: String,
    #[serde(default)]
    all_day: bool,
}

impl EventRecord {
    fn into_event(self) -> Result<BusyEvent> {
        Ok(BusyEvent {
            start: parse_datetime(&self.start)?,
            end: parse_datetime(&self.end)?,
            title: self.title,
            all_day: self.all_day,
        })
    }
}

impl JsonEventSource {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = match serde_json::from_str::<JsonDocument>(json)? {
            JsonDocument::List(records) | JsonDocument::Wrapped { events: records } => records,
        };
        let events = records
            .into_iter()
            .map(EventRecord::into_event)
            .collect::<Result<Vec<_>>>()?;
        debug!(count = events.len(), "parsed event snapshot");
        Ok(Self {
            inner: SnapshotSource::new(events),
        })
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl CalendarEventSource for JsonEventSource {
    fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<BusyEvent>> {
        self.inner.events_in_range(start, end)
    }
}

/// Parse a wall-clock datetime string.
///
/// Accepts RFC 3339 (the offset is dropped, the written wall-clock time is
/// kept), `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM`,
/// and a bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| SlotError::InvalidDatetime(format!("'{}': {}", s, e)))
}
