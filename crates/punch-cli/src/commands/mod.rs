//! CLI subcommand implementations.
//!
//! Each command loads the ledger through a [`Session`], runs one engine
//! operation and saves only if that operation changed something.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use punch_core::{Clock, Outcome, ProjectLedger, SystemClock};
use punch_store::LedgerStore;

pub mod age;
pub mod delete;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;
pub mod summary;
pub mod total;
pub mod util;

/// A loaded ledger bound to the store it came from.
pub struct Session<'a, S, C = SystemClock> {
    store: &'a S,
    pub ledger: ProjectLedger<C>,
}

impl<'a, S: LedgerStore> Session<'a, S> {
    /// Loads the ledger, reading the wall clock for "now".
    pub fn open(store: &'a S) -> Result<Self> {
        Self::with_clock(store, SystemClock)
    }
}

impl<'a, S: LedgerStore, C: Clock> Session<'a, S, C> {
    pub fn with_clock(store: &'a S, clock: C) -> Result<Self> {
        let data = store.load().context("failed to load ledger")?;
        Ok(Self {
            store,
            ledger: ProjectLedger::with_clock(data, clock),
        })
    }

    /// Saves the ledger if `outcome` changed it. Returns the outcome.
    pub fn commit(&self, outcome: Outcome) -> Result<Outcome> {
        if outcome.is_applied() {
            self.store
                .save(self.ledger.data())
                .context("failed to save ledger")?;
        } else {
            tracing::debug!(?outcome, "ledger unchanged, not saving");
        }
        Ok(outcome)
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).context("failed to render output")?;
    writeln!(writer)?;
    Ok(())
}
