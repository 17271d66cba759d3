//! Core domain logic for the punch clock.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: punch-in/punch-out intervals with their message logs
//! - The ledger: status, punching, logging, listing, totals and summaries
//! - Aging: moving old history into `<project>_old/<N>` archive slots
//!
//! Persistence and presentation live in other crates; everything here is a
//! pure computation over an in-memory [`LedgerData`] snapshot.

mod archive;
pub mod clock;
pub mod elapsed;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod options;
mod query;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use elapsed::{Elapsed, format_elapsed};
pub use entry::{LogLine, PUNCH_IN, PUNCH_OUT, TimeEntry};
pub use error::LedgerError;
pub use ledger::{LedgerData, Project, ProjectLedger};
pub use options::{EntryOptions, LogOptions, PunchOptions, RangeOptions, ReportOptions, StatusOptions};
pub use query::{Listing, UNSPECIFIED};
pub use types::{Outcome, ProjectName, Status, StatusReport, StatusValue, Statuses, ValidationError};
