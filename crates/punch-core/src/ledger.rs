//! The project time ledger.
//!
//! A [`ProjectLedger`] owns one loaded snapshot: a mapping from project name
//! to its entries in punch-in order. Parent/child relationships are derived
//! from names alone (`parent/child`); nothing links them in the data.
//!
//! # Child projects
//!
//! A project with an in-progress child reports as in, using the child's
//! active entry, and punching the parent out closes that child instead. When
//! several children are in, the lexically first child name wins.

use indexmap::IndexMap;
use tracing::debug;

use crate::clock::{Clock, SystemClock, Timestamp};
use crate::elapsed::Elapsed;
use crate::entry::{PUNCH_IN, PUNCH_OUT, TimeEntry};
use crate::error::LedgerError;
use crate::options::{EntryOptions, LogOptions, PunchOptions, RangeOptions, ReportOptions, StatusOptions};
use crate::query::Listing;
use crate::types::{Outcome, ProjectName, Status, StatusReport, StatusValue, Statuses, ValidationError};

/// Project name to entries, in insertion order.
pub type LedgerData = IndexMap<String, Vec<TimeEntry>>;

/// In-memory ledger over a loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProjectLedger<C = SystemClock> {
    pub(crate) data: LedgerData,
    pub(crate) clock: C,
}

impl ProjectLedger {
    /// Creates a ledger that reads the wall clock.
    pub fn new(data: LedgerData) -> Self {
        Self::with_clock(data, SystemClock)
    }
}

impl<C: Clock> ProjectLedger<C> {
    /// Creates a ledger with an explicit time source.
    pub const fn with_clock(data: LedgerData, clock: C) -> Self {
        Self { data, clock }
    }

    /// Borrows the snapshot, e.g. for saving.
    pub const fn data(&self) -> &LedgerData {
        &self.data
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Every known project name, in insertion order.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Every descendant of `project`, sorted by name.
    pub fn child_projects(&self, project: &str) -> Vec<&str> {
        let Ok(parent) = ProjectName::new(project) else {
            return Vec::new();
        };
        let mut children: Vec<&str> = self
            .projects()
            .filter(|name| parent.is_parent_of(name))
            .collect();
        children.sort_unstable();
        children
    }

    /// A read-only view of a single project.
    pub const fn project<'a>(&'a self, name: &'a str) -> Project<'a, C> {
        Project { ledger: self, name }
    }

    // ========== Status ==========

    /// The lexically first descendant whose last entry is active.
    fn in_progress_child(&self, project: &str) -> Option<&str> {
        self.child_projects(project)
            .into_iter()
            .find(|child| self.own_active_entry(child).is_some())
    }

    fn own_active_entry(&self, project: &str) -> Option<&TimeEntry> {
        self.data
            .get(project)
            .and_then(|entries| entries.last())
            .filter(|entry| entry.is_active())
    }

    /// The project whose active entry stands for `project`: an in-progress
    /// child first, then the project itself.
    fn active_target(&self, project: &str) -> Option<String> {
        self.in_progress_child(project)
            .map(str::to_owned)
            .or_else(|| {
                self.own_active_entry(project)
                    .map(|_| project.to_owned())
            })
    }

    fn resolve(&self, project: &str) -> Option<(Status, &TimeEntry)> {
        if let Some(entry) = self
            .in_progress_child(project)
            .and_then(|child| self.own_active_entry(child))
        {
            return Some((Status::In, entry));
        }

        let entry = self.data.get(project)?.last()?;
        let status = if entry.is_active() {
            Status::In
        } else {
            Status::Out
        };
        Some((status, entry))
    }

    /// Status of a single project; `None` when it has no entries.
    pub fn status(&self, project: &str) -> Option<Status> {
        self.resolve(project).map(|(status, _)| status)
    }

    /// Status with punch time and latest message.
    pub fn status_report(&self, project: &str) -> Option<StatusReport> {
        let (status, entry) = self.resolve(project)?;
        let (time, message) = match status {
            Status::In => (
                entry.punched_in,
                entry.last_message().map(str::to_owned),
            ),
            Status::Out => (entry.end_or(entry.punched_in), None),
        };
        Some(StatusReport {
            status,
            time,
            message,
        })
    }

    /// Status of a single project at the detail level `options.full` asks for.
    pub fn status_with(&self, project: &str, options: StatusOptions) -> Option<StatusValue> {
        if options.full {
            self.status_report(project).map(StatusValue::Full)
        } else {
            self.status(project).map(StatusValue::Bare)
        }
    }

    /// Status of every project.
    pub fn statuses(&self, options: StatusOptions) -> Statuses {
        let mut statuses: IndexMap<String, Option<StatusValue>> = self
            .projects()
            .map(|name| (name.to_owned(), self.status_with(name, options)))
            .collect();

        if options.short {
            statuses.retain(|_, value| value.as_ref().is_some_and(|v| v.status() == Status::In));
            if statuses.is_empty() {
                return Statuses::AllOut;
            }
        }
        Statuses::Projects(statuses)
    }

    /// True unless the project is in; projects without data count as out.
    pub fn is_out(&self, project: &str) -> bool {
        !self.is_in(project)
    }

    pub fn is_in(&self, project: &str) -> bool {
        self.status(project) == Some(Status::In)
    }

    // ========== Punching ==========

    /// Punches in to `project`, creating it if needed.
    ///
    /// Logs `punch in`, then the optional message, both at the punch time.
    pub fn punch_in(&mut self, project: &str, options: PunchOptions) -> Result<Outcome, LedgerError> {
        let name = ProjectName::new(project)?;
        let message = checked_message(options.message.as_deref())?;
        if self.is_in(name.as_str()) {
            debug!(project, "already punched in");
            return Ok(Outcome::Unchanged);
        }

        let at = options.time.unwrap_or_else(|| self.clock.now());
        let mut entry = TimeEntry::new(at);
        entry.push_log(PUNCH_IN, at);
        if let Some(message) = message {
            entry.push_log(message, at);
        }

        self.data.entry(name.into()).or_default().push(entry);
        debug!(project, %at, "punched in");
        Ok(Outcome::Applied)
    }

    /// Punches out of `project`, or of every project that is in.
    ///
    /// The batch form reports `Applied` if anything was punched out.
    pub fn punch_out(
        &mut self,
        project: Option<&str>,
        options: PunchOptions,
    ) -> Result<Outcome, LedgerError> {
        checked_message(options.message.as_deref())?;
        if let Some(project) = project {
            let name = ProjectName::new(project)?;
            return Ok(self.punch_out_one(name.as_str(), &options));
        }

        let names: Vec<String> = self.data.keys().cloned().collect();
        let mut applied = false;
        for name in names {
            while self.is_in(&name) {
                applied |= self.punch_out_one(&name, &options).is_applied();
            }
        }
        Ok(Outcome::from_applied(applied))
    }

    fn punch_out_one(&mut self, project: &str, options: &PunchOptions) -> Outcome {
        let Some(target) = self.active_target(project) else {
            debug!(project, "already punched out");
            return Outcome::Unchanged;
        };
        let at = options.time.unwrap_or_else(|| self.clock.now());

        let Some(entry) = self.data.get_mut(&target).and_then(|e| e.last_mut()) else {
            return Outcome::Unchanged;
        };
        entry.punched_out = Some(at);
        if let Some(message) = &options.message {
            entry.push_log(message, at);
        }
        entry.push_log(PUNCH_OUT, at);

        debug!(project, closed = %target, %at, "punched out");
        Outcome::Applied
    }

    /// Appends a message to the active entry of `project`.
    pub fn log(
        &mut self,
        project: &str,
        message: &str,
        options: LogOptions,
    ) -> Result<Outcome, LedgerError> {
        let name = ProjectName::new(project)?;
        checked_message(Some(message))?;

        let Some(target) = self.active_target(name.as_str()) else {
            debug!(project, "not punched in, nothing to log to");
            return Ok(Outcome::Unchanged);
        };
        let at = options.time.unwrap_or_else(|| self.clock.now());
        if let Some(entry) = self.data.get_mut(&target).and_then(|e| e.last_mut()) {
            entry.push_log(message, at);
        }
        Ok(Outcome::Applied)
    }

    /// Records a finished interval: punch in at `from`, out at `to`.
    pub fn entry(&mut self, project: &str, options: EntryOptions) -> Result<Outcome, LedgerError> {
        let from = options.from.ok_or(LedgerError::MissingBound { bound: "from" })?;
        let to = options.to.ok_or(LedgerError::MissingBound { bound: "to" })?;

        let punched_in = self.punch_in(
            project,
            PunchOptions {
                time: Some(from),
                message: options.message,
            },
        )?;
        if !punched_in.is_applied() {
            return Ok(punched_in);
        }
        self.punch_out(Some(project), PunchOptions::at(to))
    }

    /// Alias of [`entry`](Self::entry).
    pub fn clock(&mut self, project: &str, options: EntryOptions) -> Result<Outcome, LedgerError> {
        self.entry(project, options)
    }

    /// Removes a project and all of its entries.
    pub fn delete(&mut self, project: &str) -> Result<Outcome, LedgerError> {
        let name = ProjectName::new(project)?;
        if self.data.shift_remove(name.as_str()).is_some() {
            debug!(project, "deleted");
            Ok(Outcome::Applied)
        } else {
            Ok(Outcome::NotFound)
        }
    }
}

/// Rejects blank messages; `None` stays `None`.
fn checked_message(message: Option<&str>) -> Result<Option<&str>, ValidationError> {
    match message {
        Some(message) if message.trim().is_empty() => Err(ValidationError::Empty { field: "message" }),
        other => Ok(other),
    }
}

/// A borrowed view of one project in a ledger.
#[derive(Debug, Clone, Copy)]
pub struct Project<'a, C> {
    ledger: &'a ProjectLedger<C>,
    name: &'a str,
}

impl<C: Clock> Project<'_, C> {
    pub const fn name(&self) -> &str {
        self.name
    }

    pub fn status(&self) -> Option<Status> {
        self.ledger.status(self.name)
    }

    pub fn is_in(&self) -> bool {
        self.ledger.is_in(self.name)
    }

    pub fn is_out(&self) -> bool {
        self.ledger.is_out(self.name)
    }

    pub fn list(&self, range: &RangeOptions) -> Option<Listing<Vec<TimeEntry>>> {
        self.ledger.list(Some(self.name), range)
    }

    pub fn total(&self, options: &ReportOptions) -> Option<Listing<Elapsed>> {
        self.ledger.total(Some(self.name), options)
    }

    pub fn summary(&self, options: &ReportOptions) -> Option<IndexMap<String, Elapsed>> {
        self.ledger.summary(self.name, options).ok().flatten()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use chrono::{DateTime, Duration};

    use crate::clock::FixedClock;
    use crate::entry::LogLine;

    pub(crate) fn base() -> Timestamp {
        DateTime::parse_from_rfc3339("2008-08-23T09:00:00-05:00").unwrap()
    }

    pub(crate) fn ts(minutes: i64) -> Timestamp {
        base() + Duration::minutes(minutes)
    }

    pub(crate) fn ledger_at(minutes: i64) -> ProjectLedger<FixedClock> {
        ProjectLedger::with_clock(LedgerData::new(), FixedClock(ts(minutes)))
    }

    pub(crate) fn closed(from: i64, to: i64) -> TimeEntry {
        let mut entry = TimeEntry::new(ts(from));
        entry.punched_out = Some(ts(to));
        entry
    }

    fn log_line(message: &str, minutes: i64) -> String {
        LogLine::render(message, ts(minutes))
    }

    #[test]
    fn unknown_project_has_no_status_and_is_out() {
        let ledger = ledger_at(0);
        assert_eq!(ledger.status("nothing"), None);
        assert!(ledger.is_out("nothing"));
        assert!(!ledger.is_in("nothing"));
    }

    #[test]
    fn empty_project_has_no_status() {
        let mut data = LedgerData::new();
        data.insert("empty".into(), Vec::new());
        let ledger = ProjectLedger::with_clock(data, FixedClock(ts(0)));
        assert_eq!(ledger.status("empty"), None);
        assert!(ledger.is_out("empty"));
    }

    #[test]
    fn status_follows_last_entry() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("work".into(), vec![closed(0, 10)]);
        assert_eq!(ledger.status("work"), Some(Status::Out));

        ledger.data["work"].push(TimeEntry::new(ts(20)));
        assert_eq!(ledger.status("work"), Some(Status::In));
    }

    #[test]
    fn punch_in_appends_entry_and_logs() {
        let mut ledger = ledger_at(5);
        let outcome = ledger
            .punch_in("work", PunchOptions::default().with_message("starting"))
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        let entries = &ledger.data()["work"];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].punched_in, ts(5));
        assert_eq!(
            entries[0].log,
            vec![log_line("punch in", 5), log_line("starting", 5)]
        );
    }

    #[test]
    fn punch_in_twice_is_unchanged() {
        let mut ledger = ledger_at(0);
        ledger.punch_in("work", PunchOptions::default()).unwrap();
        let outcome = ledger.punch_in("work", PunchOptions::at(ts(3))).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(ledger.data()["work"].len(), 1);
    }

    #[test]
    fn punch_in_rejects_empty_project() {
        let mut ledger = ledger_at(0);
        let err = ledger.punch_in("", PunchOptions::default()).unwrap_err();
        assert_eq!(
            err,
            LedgerError::Invalid(ValidationError::Empty {
                field: "project name"
            })
        );
        assert!(ledger.data().is_empty());
    }

    #[test]
    fn punch_out_when_out_is_unchanged() {
        let mut ledger = ledger_at(0);
        assert_eq!(
            ledger.punch_out(Some("work"), PunchOptions::default()).unwrap(),
            Outcome::Unchanged
        );
        assert!(ledger.data().is_empty());
    }

    #[test]
    fn punch_out_logs_message_before_marker() {
        let mut ledger = ledger_at(0);
        ledger.punch_in("work", PunchOptions::default()).unwrap();
        let outcome = ledger
            .punch_out(Some("work"), PunchOptions::at(ts(30)).with_message("done"))
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        let entry = &ledger.data()["work"][0];
        assert_eq!(entry.punched_out, Some(ts(30)));
        assert_eq!(
            entry.log,
            vec![
                log_line("punch in", 0),
                log_line("done", 30),
                log_line("punch out", 30)
            ]
        );
        assert!(ledger.is_out("work"));
    }

    #[test]
    fn punch_out_all_closes_every_active_project() {
        let mut ledger = ledger_at(45);
        ledger.punch_in("a", PunchOptions::at(ts(0))).unwrap();
        ledger.punch_in("b", PunchOptions::at(ts(10))).unwrap();
        ledger.data.insert("c".into(), vec![closed(0, 5)]);

        let outcome = ledger.punch_out(None, PunchOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(ledger.data()["a"][0].punched_out, Some(ts(45)));
        assert_eq!(ledger.data()["b"][0].punched_out, Some(ts(45)));
        assert_eq!(ledger.data()["c"][0].punched_out, Some(ts(5)));
    }

    #[test]
    fn punch_out_all_with_nothing_in_is_unchanged() {
        let mut ledger = ledger_at(45);
        ledger.data.insert("c".into(), vec![closed(0, 5)]);
        assert_eq!(
            ledger.punch_out(None, PunchOptions::default()).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn in_progress_child_overrides_parent_status() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("work".into(), vec![closed(0, 10)]);
        ledger.punch_in("work/design", PunchOptions::at(ts(20))).unwrap();

        assert_eq!(ledger.status("work"), Some(Status::In));
        let report = ledger.status_report("work").unwrap();
        assert_eq!(report.time, ts(20));
        assert_eq!(report.message.as_deref(), Some("punch in"));
    }

    #[test]
    fn child_overrides_parent_without_data() {
        let mut ledger = ledger_at(60);
        ledger.punch_in("work/design", PunchOptions::at(ts(20))).unwrap();
        assert!(ledger.is_in("work"));
        assert!(ledger.is_out("workshop"));
    }

    #[test]
    fn parent_punch_out_closes_child() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("work".into(), vec![closed(0, 10)]);
        ledger.punch_in("work/design", PunchOptions::at(ts(20))).unwrap();

        let outcome = ledger.punch_out(Some("work"), PunchOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(ledger.data()["work/design"][0].punched_out, Some(ts(60)));
        assert_eq!(ledger.data()["work"][0].punched_out, Some(ts(10)));
        assert!(ledger.is_out("work"));
    }

    #[test]
    fn lexically_first_child_wins() {
        let mut ledger = ledger_at(60);
        ledger.punch_in("work/zeta", PunchOptions::at(ts(5))).unwrap();
        ledger.punch_in("work/alpha", PunchOptions::at(ts(10))).unwrap();

        assert_eq!(ledger.status_report("work").unwrap().time, ts(10));
        ledger.punch_out(Some("work"), PunchOptions::default()).unwrap();
        assert!(ledger.is_out("work/alpha"));
        assert!(ledger.is_in("work/zeta"));
    }

    #[test]
    fn punch_out_all_closes_parent_and_child() {
        let mut ledger = ledger_at(60);
        ledger.punch_in("work", PunchOptions::at(ts(0))).unwrap();
        ledger.punch_in("work/design", PunchOptions::at(ts(20))).unwrap();

        ledger.punch_out(None, PunchOptions::default()).unwrap();

        assert!(ledger.is_out("work"));
        assert!(ledger.is_out("work/design"));
    }

    #[test]
    fn status_report_for_out_project() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("work".into(), vec![closed(0, 10)]);
        let report = ledger.status_report("work").unwrap();
        assert_eq!(report.status, Status::Out);
        assert_eq!(report.time, ts(10));
        assert_eq!(report.message, None);
        assert_eq!(ledger.status_report("missing"), None);
    }

    #[test]
    fn status_report_message_strips_timestamp() {
        let mut ledger = ledger_at(60);
        ledger.punch_in("work", PunchOptions::at(ts(0))).unwrap();
        ledger.log("work", "reviewing", LogOptions { time: Some(ts(5)) }).unwrap();

        let report = ledger.status_report("work").unwrap();
        assert_eq!(report.message.as_deref(), Some("reviewing"));
        assert_eq!(report.time, ts(0));
    }

    #[test]
    fn statuses_for_all_projects() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("a".into(), vec![closed(0, 10)]);
        ledger.data.insert("b".into(), Vec::new());
        ledger.punch_in("c", PunchOptions::at(ts(15))).unwrap();

        let Statuses::Projects(all) = ledger.statuses(StatusOptions::default()) else {
            panic!("expected per-project statuses");
        };
        assert_eq!(all["a"], Some(StatusValue::Bare(Status::Out)));
        assert_eq!(all["b"], None);
        assert_eq!(all["c"], Some(StatusValue::Bare(Status::In)));

        let short = ledger.statuses(StatusOptions {
            short: true,
            full: false,
        });
        let Statuses::Projects(short) = short else {
            panic!("expected per-project statuses");
        };
        assert_eq!(short.keys().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn statuses_short_with_nothing_in() {
        let mut ledger = ledger_at(60);
        ledger.data.insert("a".into(), vec![closed(0, 10)]);
        let short = ledger.statuses(StatusOptions {
            short: true,
            full: true,
        });
        assert_eq!(short, Statuses::AllOut);
    }

    #[test]
    fn log_requires_active_project() {
        let mut ledger = ledger_at(0);
        assert_eq!(
            ledger.log("work", "thinking", LogOptions::default()).unwrap(),
            Outcome::Unchanged
        );

        ledger.punch_in("work", PunchOptions::default()).unwrap();
        assert_eq!(
            ledger.log("work", "thinking", LogOptions { time: Some(ts(7)) }).unwrap(),
            Outcome::Applied
        );
        assert_eq!(ledger.data()["work"][0].log.last(), Some(&log_line("thinking", 7)));
    }

    #[test]
    fn log_rejects_empty_message() {
        let mut ledger = ledger_at(0);
        ledger.punch_in("work", PunchOptions::default()).unwrap();
        let err = ledger.log("work", " ", LogOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "message cannot be empty");
    }

    #[test]
    fn log_goes_to_in_progress_child() {
        let mut ledger = ledger_at(0);
        ledger.punch_in("work/design", PunchOptions::default()).unwrap();
        ledger.log("work", "sketching", LogOptions::default()).unwrap();
        assert_eq!(ledger.data()["work/design"][0].log.len(), 2);
        assert!(!ledger.data().contains_key("work"));
    }

    #[test]
    fn entry_records_closed_interval() {
        let mut ledger = ledger_at(600);
        let outcome = ledger
            .entry(
                "work",
                EntryOptions {
                    from: Some(ts(0)),
                    to: Some(ts(65)),
                    message: Some("pairing".into()),
                },
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        let entry = &ledger.data()["work"][0];
        assert_eq!(entry.punched_in, ts(0));
        assert_eq!(entry.punched_out, Some(ts(65)));
        assert_eq!(entry.log.len(), 3);
    }

    #[test]
    fn entry_requires_both_bounds() {
        let mut ledger = ledger_at(0);
        let err = ledger
            .clock(
                "work",
                EntryOptions {
                    from: Some(ts(0)),
                    ..EntryOptions::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, LedgerError::MissingBound { bound: "to" });
        assert!(ledger.data().is_empty());
    }

    #[test]
    fn entry_requires_start() {
        let mut ledger = ledger_at(0);
        let err = ledger
            .entry(
                "work",
                EntryOptions {
                    to: Some(ts(30)),
                    ..EntryOptions::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, LedgerError::MissingBound { bound: "from" });
        assert!(ledger.data().is_empty());
    }

    #[test]
    fn blank_punch_messages_are_rejected() {
        let mut ledger = ledger_at(0);
        let err = ledger
            .punch_in("work", PunchOptions::default().with_message("  "))
            .unwrap_err();
        assert_eq!(err, LedgerError::Invalid(ValidationError::Empty { field: "message" }));
        assert!(ledger.data().is_empty());

        ledger.punch_in("work", PunchOptions::default()).unwrap();
        for project in [Some("work"), None] {
            let err = ledger
                .punch_out(project, PunchOptions::at(ts(5)).with_message(""))
                .unwrap_err();
            assert_eq!(err, LedgerError::Invalid(ValidationError::Empty { field: "message" }));
        }
        assert!(ledger.is_in("work"));
    }

    #[test]
    fn entry_while_in_does_not_punch_out() {
        let mut ledger = ledger_at(0);
        ledger.punch_in("work", PunchOptions::default()).unwrap();
        let outcome = ledger
            .entry(
                "work",
                EntryOptions {
                    from: Some(ts(1)),
                    to: Some(ts(2)),
                    message: None,
                },
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(ledger.is_in("work"));
    }

    #[test]
    fn delete_distinguishes_missing_projects() {
        let mut ledger = ledger_at(0);
        ledger.data.insert("a".into(), vec![closed(0, 1)]);
        ledger.data.insert("b".into(), vec![closed(0, 1)]);
        ledger.data.insert("c".into(), vec![closed(0, 1)]);

        assert_eq!(ledger.delete("b").unwrap(), Outcome::Applied);
        assert_eq!(ledger.delete("b").unwrap(), Outcome::NotFound);
        assert_eq!(ledger.projects().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn child_projects_are_sorted_descendants() {
        let mut ledger = ledger_at(0);
        for name in ["work/b", "work", "work/a/x", "workshop", "work_old/1", "work/a"] {
            ledger.data.insert(name.into(), Vec::new());
        }
        assert_eq!(
            ledger.child_projects("work"),
            vec!["work/a", "work/a/x", "work/b"]
        );
        assert!(ledger.child_projects("").is_empty());
    }

    #[test]
    fn project_view_delegates() {
        let mut ledger = ledger_at(10);
        ledger.punch_in("work", PunchOptions::at(ts(0))).unwrap();
        let work = ledger.project("work");
        assert_eq!(work.name(), "work");
        assert!(work.is_in());
        assert!(!work.is_out());
        assert_eq!(work.status(), Some(Status::In));
        assert_eq!(
            work.total(&ReportOptions::default()),
            Some(Listing::Project(Elapsed::Seconds(600)))
        );
        assert_eq!(
            work.list(&RangeOptions::default()),
            Some(Listing::Project(ledger.data()["work"].clone()))
        );
        let summary = work.summary(&ReportOptions::default()).unwrap();
        assert_eq!(summary.get(crate::query::UNSPECIFIED), Some(&Elapsed::Seconds(600)));
        assert_eq!(ledger.project("missing").summary(&ReportOptions::default()), None);
    }
}
