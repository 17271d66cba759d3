//! Aging: moving a project's history into `<project>_old/<N>` slots.

use tracing::debug;

use crate::clock::Clock;
use crate::entry::TimeEntry;
use crate::error::LedgerError;
use crate::ledger::ProjectLedger;
use crate::options::RangeOptions;
use crate::types::{Outcome, ProjectName};

impl<C: Clock> ProjectLedger<C> {
    /// Moves old entries of `project` into its archive slot.
    ///
    /// Without `before`, the whole history moves and the live project is
    /// removed. With `before`, only entries punched out before it move;
    /// active entries always stay. An occupied slot is aged first, so
    /// `work_old/1` shifts to `work_old/2` and nothing is overwritten.
    /// Aging an archive slot renames it to the next slot number.
    pub fn age(&mut self, project: &str, range: &RangeOptions) -> Result<Outcome, LedgerError> {
        if range.after.is_some() || range.on.is_some() {
            return Err(LedgerError::AfterNotAllowed);
        }
        let name = ProjectName::new(project)?;
        let Some(entries) = self.data.get(name.as_str()) else {
            return Ok(Outcome::NotFound);
        };

        let (archived, kept): (Vec<TimeEntry>, Vec<TimeEntry>) = match range.before {
            Some(before) => entries
                .iter()
                .cloned()
                .partition(|entry| entry.punched_out.is_some_and(|out| out < before)),
            None => (entries.clone(), Vec::new()),
        };
        if archived.is_empty() {
            debug!(project, "nothing old enough to age");
            return Ok(Outcome::Unchanged);
        }

        let slot = name.archive_slot();
        if self.data.contains_key(slot.as_str()) {
            self.age(slot.as_str(), &RangeOptions::default())?;
        }

        debug!(project, slot = %slot, moved = archived.len(), "aged");
        self.data.insert(slot.into(), archived);
        if kept.is_empty() {
            self.data.shift_remove(name.as_str());
        } else {
            self.data.insert(name.into(), kept);
        }
        Ok(Outcome::Applied)
    }
}
