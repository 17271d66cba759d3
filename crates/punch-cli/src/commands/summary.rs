//! Summary command for breaking time down by logged message.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, ReportOptions};
use punch_store::LedgerStore;

use super::list::RangeArgs;
use super::{Session, write_json};

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Project to summarize.
    pub project: String,
    #[command(flatten)]
    pub range: RangeArgs,
    /// Print raw seconds instead of H:MM:SS.
    #[arg(long)]
    pub seconds: bool,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &Session<'_, S, C>,
    args: &SummaryArgs,
) -> Result<()> {
    let options = ReportOptions {
        range: (&args.range).into(),
        format: !args.seconds,
    };
    match session.ledger.summary(&args.project, &options)? {
        Some(summary) => write_json(writer, &summary)?,
        None => writeln!(writer, "No data for '{}'", args.project)?,
    }
    Ok(())
}
