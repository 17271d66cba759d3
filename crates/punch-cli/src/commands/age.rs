//! Age command for archiving old history.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, Outcome, RangeOptions, Timestamp};
use punch_store::LedgerStore;

use super::Session;
use super::util::parse_datetime;

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Project to age.
    pub project: String,
    /// Only archive entries punched out before this time.
    #[arg(long, value_parser = parse_datetime)]
    pub before: Option<Timestamp>,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &AgeArgs,
) -> Result<()> {
    let range = RangeOptions {
        before: args.before,
        ..RangeOptions::default()
    };
    let outcome = session.ledger.age(&args.project, &range)?;
    match session.commit(outcome)? {
        Outcome::Applied => writeln!(writer, "Aged '{}'", args.project)?,
        Outcome::Unchanged => writeln!(writer, "Nothing to age in '{}'", args.project)?,
        Outcome::NotFound => writeln!(writer, "No data for '{}'", args.project)?,
    }
    Ok(())
}
