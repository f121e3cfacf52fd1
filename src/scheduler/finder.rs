//! Opportunity discovery.
//!
//! Cross-joins equal-sized active and pledge groups, intersects every
//! member's slot set, and keeps the combinations that share at least one
//! one-hour block.
//!
//! # Block selection
//! Only the earliest qualifying block is carried forward; the total
//! number of qualifying blocks is kept as a diagnostic. Exhaustively
//! trying every block per group pair would multiply the candidate count
//! for little scheduling benefit.
//!
//! # Complexity
//! O(|A| · |P|) group pairs, each intersecting up to six sorted slot
//! sets. This cross-join is the dominant cost of a run.

use std::collections::HashSet;

use crate::availability::AvailabilityIndex;
use crate::history::PairHistory;
use crate::models::{Group, Opportunity, PersonId, SlotTime, TimeBlock, SLOT_SECONDS};

/// Finds schedulable (active group, pledge group, block) combinations.
#[derive(Debug)]
pub struct OpportunityFinder<'a> {
    index: &'a AvailabilityIndex,
    history: &'a PairHistory,
    biased: HashSet<PersonId>,
}

impl<'a> OpportunityFinder<'a> {
    /// Creates a finder over the run's availability and history.
    pub fn new(index: &'a AvailabilityIndex, history: &'a PairHistory) -> Self {
        Self {
            index,
            history,
            biased: HashSet::new(),
        }
    }

    /// Sets the priority-biased active ids used for the bias deficit.
    pub fn with_biased(mut self, biased: HashSet<PersonId>) -> Self {
        self.biased = biased;
        self
    }

    /// Cross-joins the two group lists and returns every viable
    /// opportunity, in generation order.
    pub fn find(&self, active_groups: &[Group], pledge_groups: &[Group]) -> Vec<Opportunity> {
        let mut opportunities = Vec::new();
        for active_group in active_groups {
            for pledge_group in pledge_groups {
                if active_group.size() != pledge_group.size() {
                    continue;
                }
                if let Some(op) = self.examine(active_group, pledge_group) {
                    opportunities.push(op);
                }
            }
        }
        opportunities
    }

    /// Checks one group pair; `None` when no shared one-hour block exists.
    fn examine(&self, active_group: &Group, pledge_group: &Group) -> Option<Opportunity> {
        let participant_ids: Vec<PersonId> = active_group
            .members
            .iter()
            .chain(pledge_group.members.iter())
            .copied()
            .collect();

        // Intersection of every participant's slot set. Sorted, because
        // the first set iterates in order and retain preserves it.
        let mut common: Vec<SlotTime> = self
            .index
            .slots_for(participant_ids[0])?
            .iter()
            .copied()
            .collect();
        for &pid in &participant_ids[1..] {
            let slots = self.index.slots_for(pid)?;
            common.retain(|s| slots.contains(s));
            if common.is_empty() {
                return None;
            }
        }

        // Adjacent 30-minute slots form a one-hour block.
        let blocks: Vec<TimeBlock> = common
            .windows(2)
            .filter(|w| w[1] - w[0] == SLOT_SECONDS)
            .map(|w| TimeBlock::new(w[0]))
            .collect();
        let earliest = *blocks.first()?;

        let prior_meetings: u32 = active_group
            .members
            .iter()
            .flat_map(|&a| pledge_group.members.iter().map(move |&p| (a, p)))
            .map(|(a, p)| self.history.count(a, p))
            .sum();

        let biased_seats = active_group
            .members
            .iter()
            .filter(|id| self.biased.contains(*id))
            .count();
        let bias_deficit = (active_group.size() - biased_seats) as u32;

        Some(Opportunity {
            active_group: active_group.clone(),
            pledge_group: pledge_group.clone(),
            block: earliest,
            prior_meetings,
            bias_deficit,
            participant_ids,
            available_blocks: blocks.len(),
        })
    }
}
