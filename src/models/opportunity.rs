//! Candidate pairings.

use serde::{Deserialize, Serialize};

use super::{Group, PersonId, TimeBlock};

/// A candidate (active group, pledge group, block) combination that has
/// not been admitted yet.
///
/// Opportunities are computed fresh each run and never persisted. The
/// block is the earliest shared one-hour window; `available_blocks`
/// records how many such windows existed, as a diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    /// The active-side group.
    pub active_group: Group,
    /// The pledge-side group, same size as the active side.
    pub pledge_group: Group,
    /// Earliest one-hour block every participant is free for.
    pub block: TimeBlock,
    /// Sum of persisted meeting counts over all active × pledge pairs.
    pub prior_meetings: u32,
    /// Group seats not held by a priority-biased active.
    pub bias_deficit: u32,
    /// Everyone involved, actives first.
    pub participant_ids: Vec<PersonId>,
    /// Number of shared one-hour blocks that qualified.
    pub available_blocks: usize,
}

impl Opportunity {
    /// Size of either group.
    #[inline]
    pub fn group_size(&self) -> usize {
        self.active_group.size()
    }

    /// Every (active, pledge) pair across the two groups.
    pub fn cross_pairs(&self) -> impl Iterator<Item = (PersonId, PersonId)> + '_ {
        self.active_group.members.iter().flat_map(move |&a| {
            self.pledge_group.members.iter().map(move |&p| (a, p))
        })
    }
}
