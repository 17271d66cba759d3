//! Total command for reporting time spent.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, Listing, ReportOptions};
use punch_store::LedgerStore;

use super::list::RangeArgs;
use super::{Session, write_json};

#[derive(Debug, Args)]
pub struct TotalArgs {
    /// Project to total, with its children (default: every project).
    pub project: Option<String>,
    #[command(flatten)]
    pub range: RangeArgs,
    /// Print raw seconds instead of H:MM:SS.
    #[arg(long)]
    pub seconds: bool,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &Session<'_, S, C>,
    args: &TotalArgs,
) -> Result<()> {
    let options = ReportOptions {
        range: (&args.range).into(),
        format: !args.seconds,
    };
    match session.ledger.total(args.project.as_deref(), &options) {
        Some(Listing::Project(total)) => writeln!(writer, "{total}")?,
        Some(totals) => write_json(writer, &totals)?,
        None => writeln!(writer, "No data for '{}'", args.project.as_deref().unwrap_or_default())?,
    }
    Ok(())
}
