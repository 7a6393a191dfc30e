//! Human-readable rendering of an availability report.

use std::fmt::Write;

use chrono::{NaiveDate, Weekday};
use slot_engine::{AvailabilityReport, DayReport, TimeInterval};

const DAY_MARKER: &str = "🗓️  ";
const SLOT_MARKER: &str = "✅ ";
const RULE_WIDE: usize = 50;
const RULE: usize = 40;

pub struct TextOptions {
    pub verbose: bool,
    /// Events fetched for the range, shown in verbose mode.
    pub event_count: usize,
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `08:00 - 10:00 (2h 0m)`
pub fn format_slot(slot: &TimeInterval) -> String {
    let minutes = slot.duration_minutes();
    format!(
        "{} - {} ({}h {}m)",
        slot.start.format("%H:%M"),
        slot.end.format("%H:%M"),
        minutes / 60,
        minutes % 60
    )
}

fn day_title(day: &DayReport) -> String {
    format!("{} ({})", weekday_name(day.weekday), fmt_date(day.date))
}

/// Console listing of every day with slots, plus settings and per-week
/// totals in verbose mode.
pub fn render_text(report: &AvailabilityReport, opts: &TextOptions) -> String {
    let mut out = String::new();
    let policy = &report.policy;

    if opts.verbose {
        let days: Vec<&str> = policy.work_days().iter().map(|d| weekday_name(*d)).collect();
        let _ = writeln!(out, "Free Slots Finder");
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDE));
        let _ = writeln!(out, "Settings:");
        let _ = writeln!(
            out,
            "   - Work hours: {}:00 - {}:00",
            policy.work_start_hour(),
            policy.work_end_hour()
        );
        let _ = writeln!(out, "   - Work days: {}", days.join(", "));
        let _ = writeln!(
            out,
            "   - Minimum slot length: {} minutes",
            policy.min_slot_minutes()
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Analysing {} - {}",
            fmt_date(policy.range_start()),
            fmt_date(policy.range_end())
        );
        let _ = writeln!(out, "Found {} events", opts.event_count);
        let _ = writeln!(out);
    }

    for week in &report.weeks {
        if opts.verbose {
            let _ = writeln!(out, "WEEK {}", week.number);
            let _ = writeln!(
                out,
                "   {} - {}",
                fmt_date(week.window.week_start),
                fmt_date(week.window.week_end)
            );
            let _ = writeln!(out, "{}", "-".repeat(RULE));
        }

        for day in &week.days {
            if !day.slots.is_empty() {
                let _ = writeln!(out, "\n{}{}", DAY_MARKER, day_title(day));
                for slot in &day.slots {
                    let _ = writeln!(out, "   • {}", format_slot(slot));
                }
            } else if opts.verbose {
                let _ = writeln!(out, "\n{}{}", DAY_MARKER, day_title(day));
                let _ = writeln!(out, "   ❌ No free slots for meetings");
            }
        }

        if opts.verbose {
            let _ = writeln!(
                out,
                "\nWeek total: {} slots, {:.1} hours",
                week.slot_count, week.free_hours
            );
            let _ = writeln!(out);
        }
    }

    out
}

/// Grand totals printed at the end of a verbose run.
pub fn render_summary(report: &AvailabilityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSUMMARY:");
    let _ = writeln!(out, "{}", "-".repeat(RULE));
    let _ = writeln!(out, "Total free slots: {}", report.total_slots);
    let _ = writeln!(out, "Total free time: {:.1} hours", report.total_free_hours);
    match report.utilization_percent() {
        Some(pct) => {
            let _ = writeln!(out, "Average utilization: {:.1}%", pct);
        }
        None => {
            let _ = writeln!(out, "Average utilization: n/a (no working hours in range)");
        }
    }
    if report.total_slots > 0 {
        let _ = writeln!(out, "Done! All free intervals for meetings are listed above");
    } else {
        let _ = writeln!(out, "No free intervals for meetings in this period");
    }
    out
}

/// Text placed on the clipboard: one block per day with slots, separated by
/// blank lines. `clean` drops the decorative markers.
pub fn clipboard_text(report: &AvailabilityReport, clean: bool) -> String {
    let blocks: Vec<String> = report
        .days_with_slots()
        .map(|day| {
            let mut block = if clean {
                day_title(day)
            } else {
                format!("{}{}", DAY_MARKER, day_title(day))
            };
            for slot in &day.slots {
                let marker = if clean { "" } else { SLOT_MARKER };
                block.push_str(&format!("\n   {}{}", marker, format_slot(slot)));
            }
            block
        })
        .collect();
    blocks.join("\n\n")
}
