//! Log command for annotating the active entry.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, LogOptions, Outcome, Timestamp};
use punch_store::LedgerStore;

use super::Session;
use super::util::parse_datetime;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Project that is punched in.
    pub project: String,
    /// Message to record.
    pub message: String,
    /// When the message applies from (default: now).
    #[arg(long, visible_alias = "at", value_parser = parse_datetime)]
    pub time: Option<Timestamp>,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &LogArgs,
) -> Result<()> {
    let outcome = session
        .ledger
        .log(&args.project, &args.message, LogOptions { time: args.time })?;
    if session.commit(outcome)? != Outcome::Applied {
        writeln!(writer, "Not punched in to '{}'", args.project)?;
    }
    Ok(())
}
