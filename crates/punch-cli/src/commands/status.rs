//! Status command for showing which projects are punched in.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, StatusOptions, Statuses};
use punch_store::LedgerStore;

use super::{Session, write_json};

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Project to check (default: every project).
    pub project: Option<String>,
    /// Only list projects that are in.
    #[arg(long)]
    pub short: bool,
    /// Include punch time and latest message.
    #[arg(long)]
    pub full: bool,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &Session<'_, S, C>,
    args: &StatusArgs,
) -> Result<()> {
    let options = StatusOptions {
        short: args.short,
        full: args.full,
    };

    let Some(project) = &args.project else {
        return match session.ledger.statuses(options) {
            Statuses::AllOut => writeln!(writer, "out").map_err(Into::into),
            statuses => write_json(writer, &statuses),
        };
    };

    match session.ledger.status_with(project, options) {
        None => writeln!(writer, "No data for '{project}'")?,
        Some(value) if args.full => write_json(writer, &value)?,
        Some(value) => writeln!(writer, "{}", value.status())?,
    }
    Ok(())
}
