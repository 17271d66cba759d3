//! Delete command for removing a project's history.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use punch_core::{Clock, Outcome};
use punch_store::LedgerStore;

use super::Session;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Project to delete.
    pub project: String,
}

pub fn run<W: Write, S: LedgerStore, C: Clock>(
    writer: &mut W,
    session: &mut Session<'_, S, C>,
    args: &DeleteArgs,
) -> Result<()> {
    let outcome = session.ledger.delete(&args.project)?;
    match session.commit(outcome)? {
        Outcome::Applied => writeln!(writer, "Deleted '{}'", args.project)?,
        Outcome::Unchanged | Outcome::NotFound => {
            writeln!(writer, "No data for '{}'", args.project)?;
        }
    }
    Ok(())
}
