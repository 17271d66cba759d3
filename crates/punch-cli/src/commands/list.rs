//! List command for dumping entries.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use punch_core::{Clock, RangeOptions, Timestamp};
use punch_store::LedgerStore;

use super::util::{parse_datetime, parse_day};
use super::{Session, write_json};

/// Time filter flags shared by the reporting commands.
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// Only entries starting after this time.
    #[arg(long, value_parser = parse_datetime)]
    pub after: Option<Timestamp>,
    /// Only entries ending before this time.
    #[arg(long, value_parser = parse_datetime)]
    pub before: Option<Timestamp>,
    /// Only entries within this day (YYYY-MM-DD, today, yesterday); overrides --after/--before.
    #[arg(long, value_parser = parse_day)]
    pub on: Option<NaiveDate>,
}

impl From<&RangeArgs> for RangeOptions {
    fn from(args: &RangeArgs) -> Self {
        Self {
            after: args.after,
            before: args.before,
            on: args.on,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project to list, with its children (default: every project).
    pub project: Option<String>,
    #[command(flatten)]
    pub range: RangeArgs,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &Session<'_, S, C>,
    args: &ListArgs,
) -> Result<()> {
    let range = RangeOptions::from(&args.range);
    match session.ledger.list(args.project.as_deref(), &range) {
        Some(listing) => write_json(writer, &listing),
        None => {
            writeln!(writer, "No data for '{}'", args.project.as_deref().unwrap_or_default())?;
            Ok(())
        }
    }
}
