//! Per-operation options.
//!
//! Every operation takes its own struct listing exactly the keys it
//! recognizes. The front end maps `--at` onto `time`, so the two are
//! synonyms by construction.

use chrono::NaiveDate;

use crate::clock::Timestamp;

/// Options for `status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusOptions {
    /// Only report projects that are in; report `out` if there are none.
    pub short: bool,
    /// Report time and latest message along with the status.
    pub full: bool,
}

/// Options for punching in and out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunchOptions {
    /// When the punch happened; defaults to now.
    pub time: Option<Timestamp>,
    /// A message logged alongside the punch.
    pub message: Option<String>,
}

impl PunchOptions {
    pub const fn at(time: Timestamp) -> Self {
        Self {
            time: Some(time),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Options for `log`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// When the message was logged; defaults to now.
    pub time: Option<Timestamp>,
}

/// Options for `entry`/`clock`. Both bounds are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOptions {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub message: Option<String>,
}

/// Time filter shared by `list`, `total`, `summary` and `age`.
///
/// Entries are kept when they start strictly after `after` and end strictly
/// before `before`; active entries end "now". `on` replaces both bounds with
/// the calendar day `[00:00, next 00:00)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOptions {
    pub after: Option<Timestamp>,
    pub before: Option<Timestamp>,
    pub on: Option<NaiveDate>,
}

impl RangeOptions {
    pub const fn before(before: Timestamp) -> Self {
        Self {
            after: None,
            before: Some(before),
            on: None,
        }
    }

    pub const fn on(day: NaiveDate) -> Self {
        Self {
            after: None,
            before: None,
            on: Some(day),
        }
    }
}

/// Options for `total` and `summary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub range: RangeOptions,
    /// Render durations as `H:MM:SS` instead of seconds.
    pub format: bool,
}
