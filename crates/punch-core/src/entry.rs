//! Punch entries and their message logs.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;

/// Synthetic log message recorded when a project is punched in.
pub const PUNCH_IN: &str = "punch in";

/// Synthetic log message recorded when a project is punched out.
pub const PUNCH_OUT: &str = "punch out";

/// Timestamp layout used inside log lines, e.g. `2008-08-23T15:39:00-0500`.
const LOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

const LOG_SEPARATOR: &str = " @ ";

/// One contiguous punch-in/punch-out interval.
///
/// An entry without `out` is active. Only the last entry of a project may be
/// active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// When work started.
    #[serde(rename = "in")]
    pub punched_in: Timestamp,

    /// When work stopped.
    #[serde(rename = "out", default, skip_serializing_if = "Option::is_none")]
    pub punched_out: Option<Timestamp>,

    /// Messages of the form `<message> @ <timestamp>`, in the order logged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<String>,
}

impl TimeEntry {
    /// Creates an active entry starting at `punched_in`.
    pub const fn new(punched_in: Timestamp) -> Self {
        Self {
            punched_in,
            punched_out: None,
            log: Vec::new(),
        }
    }

    /// Returns true if the entry has not been punched out.
    pub const fn is_active(&self) -> bool {
        self.punched_out.is_none()
    }

    /// The effective end of the entry, using `now` while it is active.
    pub fn end_or(&self, now: Timestamp) -> Timestamp {
        self.punched_out.unwrap_or(now)
    }

    /// Length of the entry in whole seconds.
    pub fn duration_seconds(&self, now: Timestamp) -> i64 {
        (self.end_or(now) - self.punched_in).num_seconds()
    }

    /// Appends `message` stamped with `at` to the log.
    pub fn push_log(&mut self, message: &str, at: Timestamp) {
        self.log.push(LogLine::render(message, at));
    }

    /// The message text of the most recent log line, without its timestamp.
    pub fn last_message(&self) -> Option<&str> {
        self.log.last().map(|line| LogLine::message_of(line))
    }
}

/// A parsed `<message> @ <timestamp>` log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub message: &'a str,
    pub at: Timestamp,
}

impl<'a> LogLine<'a> {
    /// Renders a log line.
    pub fn render(message: &str, at: Timestamp) -> String {
        format!("{message}{LOG_SEPARATOR}{}", at.format(LOG_TIME_FORMAT))
    }

    /// Parses a log line, splitting at the last ` @ `.
    ///
    /// Returns `None` if the separator is missing or the timestamp is malformed.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (message, at) = line.rsplit_once(LOG_SEPARATOR)?;
        let at = DateTime::parse_from_str(at.trim(), LOG_TIME_FORMAT).ok()?;
        Some(Self {
            message: message.trim(),
            at,
        })
    }

    /// The message part of a log line; the whole line if it has no timestamp.
    pub fn message_of(line: &'a str) -> &'a str {
        line.rsplit_once(LOG_SEPARATOR)
            .map_or(line, |(message, _)| message)
            .trim()
    }
}
