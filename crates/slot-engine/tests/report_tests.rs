//! Tests for the week-by-week availability report.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use slot_engine::policy::{WorkingPolicy, WEEKDAYS};
use slot_engine::report::utilization;
use slot_engine::{build_report, BusyEvent, TimeInterval};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
    date(d).and_hms_opt(h, m, 0).unwrap()
}

fn busy(d: u32, sh: u32, sm: u32, eh: u32, em: u32) -> BusyEvent {
    BusyEvent::new(at(d, sh, sm), at(d, eh, em))
}

/// 08:00-19:00, Mon-Fri, 30 min, 2026-03-16 (Mon) .. 2026-03-30 (Mon).
fn two_week_policy() -> WorkingPolicy {
    WorkingPolicy::new(8, 19, WEEKDAYS, 30, date(16), date(30)).unwrap()
}

// ── Structure ───────────────────────────────────────────────────────────────

#[test]
fn empty_calendar_two_weeks() {
    let report = build_report(&[], &two_week_policy(), at(1, 0, 0));

    assert_eq!(report.weeks.len(), 2);
    assert_eq!(report.weeks[0].number, 1);
    assert_eq!(report.weeks[1].number, 2);
    for week in &report.weeks {
        assert_eq!(week.days.len(), 5, "five work days per week");
        assert_eq!(week.slot_count, 5);
        assert!((week.free_hours - 55.0).abs() < 1e-9);
    }
    assert_eq!(report.total_slots, 10);
    assert!((report.total_free_hours - 110.0).abs() < 1e-9);
    assert!((report.total_work_hours - 110.0).abs() < 1e-9);
    assert!(report.utilization_percent().unwrap().abs() < 1e-9);
}

#[test]
fn weekends_are_not_listed() {
    let report = build_report(&[], &two_week_policy(), at(1, 0, 0));
    let weekdays: Vec<Weekday> = report.weeks[0].days.iter().map(|d| d.weekday).collect();
    assert_eq!(weekdays, WEEKDAYS.to_vec());
}

#[test]
fn tuesday_meeting_end_to_end() {
    let events = vec![busy(17, 10, 0, 11, 15)];
    let report = build_report(&events, &two_week_policy(), at(1, 0, 0));

    let tuesday = &report.weeks[0].days[1];
    assert_eq!(tuesday.date, date(17));
    assert_eq!(
        tuesday.slots,
        vec![
            TimeInterval::new(at(17, 8, 0), at(17, 10, 0)),
            TimeInterval::new(at(17, 11, 15), at(17, 19, 0)),
        ]
    );
    assert_eq!(tuesday.free_minutes, 120 + 465);
    assert_eq!(report.weeks[0].slot_count, 6);
    assert_eq!(report.total_slots, 11);

    // 75 minutes booked out of 110 hours.
    let expected = 100.0 * (1.25 / 110.0);
    assert!((report.utilization_percent().unwrap() - expected).abs() < 1e-9);
}

#[test]
fn all_day_events_do_not_change_totals() {
    let events = vec![BusyEvent::all_day(at(18, 0, 0), at(19, 0, 0)).with_title("Holiday")];
    let report = build_report(&events, &two_week_policy(), at(1, 0, 0));
    assert_eq!(report.total_slots, 10);
    assert!((report.total_free_hours - 110.0).abs() < 1e-9);
}

#[test]
fn past_days_and_today_are_truncated() {
    // Wednesday 2026-03-18 at 14:30: Mon and Tue are gone, Wed starts at 14:30.
    let report = build_report(&[], &two_week_policy(), at(18, 14, 30));
    let week1 = &report.weeks[0];

    assert!(week1.days[0].slots.is_empty());
    assert!(week1.days[1].slots.is_empty());
    assert_eq!(
        week1.days[2].slots,
        vec![TimeInterval::new(at(18, 14, 30), at(18, 19, 0))]
    );
    assert_eq!(week1.slot_count, 3);
    assert!((week1.free_hours - (4.5 + 22.0)).abs() < 1e-9);
    assert_eq!(report.days_with_slots().count(), 8);
}

#[test]
fn fully_booked_day_still_listed() {
    let events = vec![busy(19, 8, 0, 19, 0)];
    let report = build_report(&events, &two_week_policy(), at(1, 0, 0));
    let thursday = &report.weeks[0].days[3];
    assert_eq!(thursday.date, date(19));
    assert!(thursday.slots.is_empty());
    assert_eq!(thursday.free_minutes, 0);
    assert_eq!(report.days_with_slots().count(), 9);
}

#[test]
fn zero_length_range_has_no_weeks_and_no_utilization() {
    let p = WorkingPolicy::new(8, 19, WEEKDAYS, 30, date(16), date(16)).unwrap();
    let report = build_report(&[], &p, at(1, 0, 0));
    assert!(report.weeks.is_empty());
    assert_eq!(report.total_slots, 0);
    assert_eq!(report.total_work_hours, 0.0);
    assert_eq!(report.utilization_percent(), None);
}

#[test]
fn utilization_guards_zero_work_hours() {
    assert_eq!(utilization(0.0, 0.0), None);
    assert_eq!(utilization(5.0, 10.0), Some(50.0));
    assert_eq!(utilization(0.0, 10.0), Some(100.0));
}

#[test]
fn report_serializes_to_json() {
    let events = vec![busy(17, 10, 0, 11, 15)];
    let report = build_report(&events, &two_week_policy(), at(1, 0, 0));
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_slots"], 11);
    assert_eq!(value["weeks"][0]["week_start"], "2026-03-16");
    assert_eq!(value["weeks"][0]["week_end"], "2026-03-22");
    assert_eq!(value["weeks"][0]["days"][1]["slots"][0]["start"], "2026-03-17T08:00:00");
    assert_eq!(value["policy"]["work_start_hour"], 8);
}
