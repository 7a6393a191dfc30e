//! `freeslots` CLI — list free meeting slots from a calendar snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # Current week and next, 08:00-19:00, Mon-Fri, slots of 30+ minutes
//! freeslots -e calendar.json
//!
//! # Snapshot on stdin, custom hours, weekends included
//! cat calendar.json | freeslots --start-hour 9 --end-hour 17 --include-weekends
//!
//! # Explicit range, statistics, no clipboard
//! freeslots -e calendar.json --start-date 2026-03-16 --end-date 2026-03-27 --verbose --no-copy
//!
//! # Structured output
//! freeslots -e calendar.json --format json
//!
//! # Settings from a TOML file, flags still win
//! freeslots -e calendar.json --config slots.toml --min-duration 60
//! ```

mod clipboard;
mod render;

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};
use slot_engine::policy::parse_weekday;
use slot_engine::source::parse_datetime;
use slot_engine::{build_report, CalendarEventSource, JsonEventSource, SlotConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "freeslots",
    version,
    about = "Find free meeting slots in a calendar snapshot",
    args_override_self = true
)]
struct Cli {
    /// Calendar snapshot as JSON (reads stdin if omitted)
    #[arg(short, long)]
    events: Option<String>,

    /// TOML file with default settings; flags override it
    #[arg(short, long)]
    config: Option<String>,

    /// Work day start hour (default: 8)
    #[arg(long)]
    start_hour: Option<u32>,

    /// Work day end hour (default: 19)
    #[arg(long)]
    end_hour: Option<u32>,

    /// Number of weeks to analyse when no end date is given (default: 2)
    #[arg(long)]
    weeks: Option<u32>,

    /// First day to analyse, YYYY-MM-DD (default: Monday of this week)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last day of the range, YYYY-MM-DD
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Minimum slot length in minutes (default: 30)
    #[arg(long, allow_negative_numbers = true)]
    min_duration: Option<i64>,

    /// Treat Saturday and Sunday as work days
    #[arg(long)]
    include_weekends: bool,

    /// Comma-separated work days, e.g. "mon,tue,thu"
    #[arg(long, value_delimiter = ',')]
    work_days: Option<Vec<String>>,

    /// Show settings, days without slots, and summary statistics
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reference time instead of the system clock, e.g. 2026-03-17T14:30
    #[arg(long)]
    now: Option<String>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    no_copy: bool,

    /// Copy plain text without decorative markers
    #[arg(long, conflicts_with = "no_copy")]
    clean_copy: bool,

    /// Command that receives the clipboard text on stdin
    #[arg(long, default_value = "pbcopy")]
    clipboard_cmd: String,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "slot_engine=trace"
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let now = match cli.now.as_deref() {
        Some(raw) => parse_datetime(raw).with_context(|| format!("Invalid --now value: {}", raw))?,
        None => Local::now().naive_local(),
    };

    let config = build_config(&cli)?;
    let policy = config
        .into_policy(now.date())
        .context("Invalid configuration")?;
    info!(
        start = %policy.range_start(),
        end = %policy.range_end(),
        "analysis range resolved"
    );

    let source = load_events(cli.events.as_deref())?;
    let fetch_start = policy.range_start().and_time(NaiveTime::MIN);
    let fetch_end = policy
        .range_end()
        .and_hms_opt(23, 59, 0)
        .unwrap_or(fetch_start);
    let events = source
        .events_in_range(fetch_start, fetch_end)
        .context("Failed to fetch calendar events")?;
    debug!(count = events.len(), "events in range");

    let report = build_report(&events, &policy, now);

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        Format::Text => {
            let opts = render::TextOptions {
                verbose: cli.verbose,
                event_count: events.len(),
            };
            print!("{}", render::render_text(&report, &opts));

            if !cli.no_copy && report.days_with_slots().next().is_some() {
                copy_report(&cli, &report);
            } else if cli.no_copy && cli.verbose {
                println!("\nClipboard copy disabled by --no-copy");
            }

            if cli.verbose {
                print!("{}", render::render_summary(&report));
            }
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Layer command-line flags over the optional config file.
fn build_config(cli: &Cli) -> Result<SlotConfig> {
    let file = match cli.config.as_deref() {
        Some(path) => SlotConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => SlotConfig::default(),
    };

    let work_days = match &cli.work_days {
        Some(names) => Some(
            names
                .iter()
                .filter(|n| !n.trim().is_empty())
                .map(|n| {
                    parse_weekday(n)
                        .map(|d| d.num_days_from_monday() as u8)
                        .with_context(|| format!("Invalid --work-days entry: {}", n))
                })
                .collect::<Result<Vec<u8>>>()?,
        ),
        None => None,
    };

    let overrides = SlotConfig {
        work_start_hour: cli.start_hour,
        work_end_hour: cli.end_hour,
        work_days,
        include_weekends: cli.include_weekends.then_some(true),
        min_slot_minutes: cli.min_duration,
        weeks: cli.weeks,
        start_date: cli.start_date,
        end_date: cli.end_date,
    };

    Ok(file.merge(overrides))
}

fn load_events(path: Option<&str>) -> Result<JsonEventSource> {
    let json = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    if json.trim().is_empty() {
        warn!("empty calendar snapshot; every working hour counts as free");
        return Ok(JsonEventSource::default());
    }
    JsonEventSource::from_json_str(&json).context("Failed to parse calendar events")
}

/// Copy failures are reported, never fatal.
fn copy_report(cli: &Cli, report: &slot_engine::AvailabilityReport) {
    let text = render::clipboard_text(report, cli.clean_copy);
    match clipboard::copy(&cli.clipboard_cmd, &text) {
        Ok(()) => {
            if cli.clean_copy {
                println!("\nFree slots copied to clipboard (plain text)");
            } else {
                println!("\nFree slots copied to clipboard");
            }
        }
        Err(e) => {
            warn!("clipboard copy failed: {:#}", e);
            if cli.verbose {
                println!("\nCould not copy to clipboard");
            }
        }
    }
}
