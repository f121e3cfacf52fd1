//! Scheduled interviews.

use serde::{Deserialize, Serialize};

use super::{PersonId, TimeBlock};

/// An admitted interview: equal-sized active and pledge groups meeting
/// for one hour.
///
/// Owned by the run that produced it; persisting the batch is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInterview {
    /// Active-side participants.
    pub active_ids: Vec<PersonId>,
    /// Pledge-side participants.
    pub pledge_ids: Vec<PersonId>,
    /// The hour the interview occupies.
    pub block: TimeBlock,
    /// Size of either group (2 or 3).
    pub group_size: usize,
}

impl ScheduledInterview {
    /// Group-size label, e.g. `"2-on-2"`.
    pub fn label(&self) -> String {
        format!("{0}-on-{0}", self.group_size)
    }

    /// All participant ids, actives first.
    pub fn participants(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.active_ids
            .iter()
            .chain(self.pledge_ids.iter())
            .copied()
    }
}
