//! `punch in`, `punch out` and `punch entry`.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, EntryOptions, Outcome, PunchOptions, Timestamp};
use punch_store::LedgerStore;

use super::Session;
use super::util::parse_datetime;

#[derive(Debug, Args)]
pub struct InArgs {
    /// Project to punch in to.
    pub project: String,
    /// When work started (default: now).
    #[arg(long, visible_alias = "at", value_parser = parse_datetime)]
    pub time: Option<Timestamp>,
    /// Message to log at punch-in.
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct OutArgs {
    /// Project to punch out of (default: every project that is in).
    pub project: Option<String>,
    /// When work stopped (default: now).
    #[arg(long, visible_alias = "at", value_parser = parse_datetime)]
    pub time: Option<Timestamp>,
    /// Message to log before punching out.
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Project to record time against.
    pub project: String,
    /// When work started.
    #[arg(long, value_parser = parse_datetime)]
    pub from: Timestamp,
    /// When work stopped.
    #[arg(long, value_parser = parse_datetime)]
    pub to: Timestamp,
    /// Message to log at the start of the interval.
    #[arg(short, long)]
    pub message: Option<String>,
}

pub fn run_in<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &InArgs,
) -> Result<()> {
    let options = PunchOptions {
        time: args.time,
        message: args.message.clone(),
    };
    let outcome = session.ledger.punch_in(&args.project, options)?;
    if session.commit(outcome)? != Outcome::Applied {
        writeln!(writer, "Already punched in to '{}'", args.project)?;
    }
    Ok(())
}

pub fn run_out<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &OutArgs,
) -> Result<()> {
    let options = PunchOptions {
        time: args.time,
        message: args.message.clone(),
    };
    let outcome = session.ledger.punch_out(args.project.as_deref(), options)?;
    if session.commit(outcome)? != Outcome::Applied {
        match &args.project {
            Some(project) => writeln!(writer, "Already punched out of '{project}'")?,
            None => writeln!(writer, "Already punched out of all projects")?,
        }
    }
    Ok(())
}

pub fn run_entry<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &EntryArgs,
) -> Result<()> {
    let options = EntryOptions {
        from: Some(args.from),
        to: Some(args.to),
        message: args.message.clone(),
    };
    let outcome = session.ledger.entry(&args.project, options)?;
    if session.commit(outcome)? != Outcome::Applied {
        writeln!(writer, "Already punched in to '{}'", args.project)?;
    }
    Ok(())
}
