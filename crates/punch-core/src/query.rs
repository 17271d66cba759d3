//! Read-only derivations: listings, totals and per-message summaries.
//!
//! These never touch the stored ledger; filters work on copies.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::clock::{Clock, Timestamp};
use crate::elapsed::Elapsed;
use crate::entry::{LogLine, PUNCH_IN, PUNCH_OUT, TimeEntry};
use crate::error::LedgerError;
use crate::ledger::ProjectLedger;
use crate::options::{RangeOptions, ReportOptions};
use crate::types::ProjectName;

/// Summary bucket for time not covered by any message.
pub const UNSPECIFIED: &str = "unspecified";

/// Result for a single project, or for a project together with its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Project(T),
    Projects(IndexMap<String, T>),
}

impl<T> Listing<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Self::Project(value) => Listing::Project(f(value)),
            Self::Projects(values) => {
                Listing::Projects(values.into_iter().map(|(k, v)| (k, f(v))).collect())
            }
        }
    }
}

/// Resolved `(after, before)` bounds.
type Bounds = (Option<Timestamp>, Option<Timestamp>);

impl<C: Clock> ProjectLedger<C> {
    /// Resolves `on` into that day's own midnights.
    fn bounds(&self, range: &RangeOptions) -> Bounds {
        let Some(day) = range.on else {
            return (range.after, range.before);
        };
        let (start, end) = self.clock.day_bounds(day);
        (Some(start), Some(end))
    }

    fn filtered(&self, entries: &[TimeEntry], (after, before): Bounds) -> Vec<TimeEntry> {
        let now = self.now();
        entries
            .iter()
            .filter(|entry| after.is_none_or(|after| entry.punched_in > after))
            .filter(|entry| before.is_none_or(|before| entry.end_or(now) < before))
            .cloned()
            .collect()
    }

    /// Entries filtered by `range`.
    ///
    /// Without a project, every project is listed. A project with children
    /// is listed together with them, keyed by name. `None` means the project
    /// is unknown and has no children.
    pub fn list(
        &self,
        project: Option<&str>,
        range: &RangeOptions,
    ) -> Option<Listing<Vec<TimeEntry>>> {
        let bounds = self.bounds(range);

        let Some(project) = project else {
            return Some(Listing::Projects(
                self.data
                    .iter()
                    .map(|(name, entries)| (name.clone(), self.filtered(entries, bounds)))
                    .collect(),
            ));
        };

        let children = self.child_projects(project);
        if children.is_empty() {
            let entries = self.data.get(project)?;
            return Some(Listing::Project(self.filtered(entries, bounds)));
        }

        let listing = std::iter::once(project)
            .chain(children)
            .filter_map(|name| {
                let entries = self.data.get(name)?;
                Some((name.to_owned(), self.filtered(entries, bounds)))
            })
            .collect();
        Some(Listing::Projects(listing))
    }

    /// Seconds spent, per listed project.
    ///
    /// Active entries count up to now. Follows the same project expansion as
    /// [`list`](Self::list).
    pub fn total(&self, project: Option<&str>, options: &ReportOptions) -> Option<Listing<Elapsed>> {
        let now = self.now();
        let listing = self.list(project, &options.range)?;
        Some(listing.map(|entries| {
            let seconds = entries.iter().map(|e| e.duration_seconds(now)).sum();
            Elapsed::new(seconds, options.format)
        }))
    }

    /// Time spent on a project broken down by log message.
    ///
    /// Each message owns the time until the next log line. Time after the
    /// `punch in` marker and time in entries without messages is
    /// [`UNSPECIFIED`]. Empty buckets are dropped.
    pub fn summary(
        &self,
        project: &str,
        options: &ReportOptions,
    ) -> Result<Option<IndexMap<String, Elapsed>>, LedgerError> {
        let name = ProjectName::new(project)?;
        let Some(entries) = self.data.get(name.as_str()) else {
            return Ok(None);
        };

        let now = self.now();
        let mut buckets: IndexMap<String, i64> = IndexMap::new();
        for entry in self.filtered(entries, self.bounds(&options.range)) {
            summarize_entry(&entry, now, &mut buckets);
        }

        Ok(Some(
            buckets
                .into_iter()
                .filter(|(_, seconds)| *seconds != 0)
                .map(|(message, seconds)| (message, Elapsed::new(seconds, options.format)))
                .collect(),
        ))
    }
}

fn summarize_entry(entry: &TimeEntry, now: Timestamp, buckets: &mut IndexMap<String, i64>) {
    let mut marks: Vec<(&str, Timestamp)> = entry
        .log
        .iter()
        .filter_map(|line| {
            let parsed = LogLine::parse(line);
            if parsed.is_none() {
                warn!(line = %line, "skipping malformed log line");
            }
            parsed
        })
        .map(|line| {
            let message = if line.message == PUNCH_IN {
                UNSPECIFIED
            } else {
                line.message
            };
            (message, line.at)
        })
        .collect();

    let Some(&(last, _)) = marks.last() else {
        *buckets.entry(UNSPECIFIED.to_owned()).or_default() += entry.duration_seconds(now);
        return;
    };
    if last != PUNCH_OUT {
        marks.push((PUNCH_OUT, entry.end_or(now)));
    }

    for pair in marks.windows(2) {
        let [(message, start), (_, end)] = pair else {
            continue;
        };
        if *message == PUNCH_OUT {
            continue;
        }
        *buckets.entry((*message).to_owned()).or_default() += (*end - *start).num_seconds();
    }
}
