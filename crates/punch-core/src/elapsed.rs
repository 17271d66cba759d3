//! Clock-style rendering of elapsed seconds.

use std::fmt;

use serde::Serialize;

/// Formats seconds as `H:MM:SS`, dropping the hour when it is zero.
///
/// Negative input renders as `00:00`.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (minutes, secs) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours == 0 {
        format!("{minutes:02}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

/// An elapsed duration, either raw or already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Elapsed {
    /// Whole seconds.
    Seconds(i64),
    /// Output of [`format_elapsed`].
    Clock(String),
}

impl Elapsed {
    /// Wraps `seconds`, formatting it when `format` is set.
    pub fn new(seconds: i64, format: bool) -> Self {
        if format {
            Self::Clock(format_elapsed(seconds))
        } else {
            Self::Seconds(seconds)
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s}"),
            Self::Clock(c) => f.write_str(c),
        }
    }
}
