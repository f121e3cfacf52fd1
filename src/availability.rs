//! Per-person availability lookup.
//!
//! Turns raw slot records into a per-person sorted slot set restricted
//! to the target week. Pure transformation; the rest of the pipeline
//! only ever reads it.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{PersonId, SlotTime};

/// One raw availability record: the person is free for the 30-minute
/// slot starting at `slot_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Who is available.
    pub person_id: PersonId,
    /// Slot start (unix seconds, aligned to the half hour).
    pub slot_start: SlotTime,
}

impl AvailabilityRecord {
    /// Creates a record.
    pub fn new(person_id: PersonId, slot_start: SlotTime) -> Self {
        Self {
            person_id,
            slot_start,
        }
    }
}

/// Per-person availability for one target week.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    slots: HashMap<PersonId, BTreeSet<SlotTime>>,
}

impl AvailabilityIndex {
    /// Builds the index from raw records, keeping only slots inside
    /// `[week_start, week_end)`. Duplicate records collapse.
    pub fn build(
        records: &[AvailabilityRecord],
        week_start: SlotTime,
        week_end: SlotTime,
    ) -> Self {
        let mut slots: HashMap<PersonId, BTreeSet<SlotTime>> = HashMap::new();
        let mut dropped = 0usize;

        for record in records {
            if record.slot_start < week_start || record.slot_start >= week_end {
                dropped += 1;
                continue;
            }
            slots
                .entry(record.person_id)
                .or_default()
                .insert(record.slot_start);
        }

        if dropped > 0 {
            log::debug!("dropped {dropped} availability records outside the target week");
        }

        Self { slots }
    }

    /// Whether the person has at least one slot this week.
    pub fn has_availability(&self, id: PersonId) -> bool {
        self.slots.get(&id).is_some_and(|s| !s.is_empty())
    }

    /// The person's sorted slot set, if any was recorded.
    pub fn slots_for(&self, id: PersonId) -> Option<&BTreeSet<SlotTime>> {
        self.slots.get(&id)
    }

    /// Whether two people share at least one slot.
    pub fn overlap_exists(&self, a: PersonId, b: PersonId) -> bool {
        match (self.slots.get(&a), self.slots.get(&b)) {
            (Some(sa), Some(sb)) => sa.intersection(sb).next().is_some(),
            _ => false,
        }
    }

    /// Number of people with any recorded slot.
    pub fn person_count(&self) -> usize {
        self.slots.len()
    }
}
