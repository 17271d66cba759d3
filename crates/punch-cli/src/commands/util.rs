//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeZone};
use regex::Regex;

use punch_core::Timestamp;

/// Pre-compiled regex for relative time parsing.
static RELATIVE_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(minute|hour|day|week)s?\s+ago$").unwrap());

/// Conservative bounds for relative time parsing (~1000 years in minutes).
const MAX_RELATIVE_MINUTES: i64 = 1000 * 365 * 24 * 60;

/// Local date-time layouts accepted besides RFC 3339.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a time argument.
///
/// Supports:
/// - RFC 3339: "2008-08-23T15:39:00-05:00"
/// - Local time: "2008-08-23 15:39", "2008-08-23 15:39:10"
/// - Local date (midnight): "2008-08-23"
/// - Relative: "2 hours ago", "30 minutes ago", "1 day ago", "1 week ago"
pub fn parse_datetime(s: &str) -> anyhow::Result<Timestamp> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.trunc_subsecs(0));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return local(naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local(date.and_time(NaiveTime::MIN));
    }

    let Some(caps) = RELATIVE_TIME_RE.captures(s) else {
        anyhow::bail!(
            "Invalid time: {s}. Use RFC 3339 (e.g., 2008-08-23T15:39:00-05:00), local time (e.g., '2008-08-23 15:39') or relative (e.g., '2 hours ago')"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative time")?;

    let (max_for_unit, minutes_per_unit) = match &caps[2] {
        "minute" => (MAX_RELATIVE_MINUTES, 1),
        "hour" => (MAX_RELATIVE_MINUTES / 60, 60),
        "day" => (MAX_RELATIVE_MINUTES / (60 * 24), 60 * 24),
        "week" => (MAX_RELATIVE_MINUTES / (60 * 24 * 7), 60 * 24 * 7),
        unit => anyhow::bail!("Unknown time unit: {unit}"),
    };

    if n > max_for_unit {
        anyhow::bail!("Relative time value too large: {n} {}", &caps[2]);
    }

    let duration = Duration::minutes(n * minutes_per_unit);
    Ok((Local::now() - duration).fixed_offset().trunc_subsecs(0))
}

/// Parse a calendar day: "YYYY-MM-DD", "today" or "yesterday".
pub fn parse_day(s: &str) -> anyhow::Result<NaiveDate> {
    let today = Local::now().date_naive();
    match s.trim() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .with_context(|| format!("Invalid day: {other}. Use YYYY-MM-DD, 'today' or 'yesterday'")),
    }
}

/// Interprets a wall-clock time in the local timezone.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant.
fn local(naive: NaiveDateTime) -> anyhow::Result<Timestamp> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .with_context(|| format!("{naive} does not exist in the local timezone"))
}
