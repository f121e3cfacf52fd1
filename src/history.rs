//! Persisted meeting history.
//!
//! A read-only snapshot of completed meetings, taken once at the start
//! of a run. Pairs admitted during the run are tracked separately by the
//! scheduler's ledger and never written back here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::PersonId;

/// One completed meeting between an active and a pledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The active participant.
    pub active_id: PersonId,
    /// The pledge participant.
    pub pledge_id: PersonId,
}

impl HistoryRecord {
    /// Creates a record.
    pub fn new(active_id: PersonId, pledge_id: PersonId) -> Self {
        Self {
            active_id,
            pledge_id,
        }
    }
}

/// Meeting counts per (active, pledge) pair.
#[derive(Debug, Clone, Default)]
pub struct PairHistory {
    counts: HashMap<(PersonId, PersonId), u32>,
    totals: HashMap<PersonId, u32>,
}

impl PairHistory {
    /// Builds the history from completed-meeting records, one record per
    /// occurrence.
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let mut history = Self::default();
        for record in records {
            history.add(record.active_id, record.pledge_id);
        }
        history
    }

    /// Records one meeting between the pair.
    pub fn add(&mut self, active: PersonId, pledge: PersonId) {
        *self.counts.entry((active, pledge)).or_insert(0) += 1;
        *self.totals.entry(active).or_insert(0) += 1;
        *self.totals.entry(pledge).or_insert(0) += 1;
    }

    /// How many times the pair has met.
    pub fn count(&self, active: PersonId, pledge: PersonId) -> u32 {
        self.counts.get(&(active, pledge)).copied().unwrap_or(0)
    }

    /// Whether the pair has met at least once.
    pub fn have_met(&self, active: PersonId, pledge: PersonId) -> bool {
        self.count(active, pledge) > 0
    }

    /// Total meetings this person has had, on either side.
    pub fn total_for(&self, id: PersonId) -> u32 {
        self.totals.get(&id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_totals() {
        let records = vec![
            HistoryRecord::new(1, 10),
            HistoryRecord::new(1, 10),
            HistoryRecord::new(1, 11),
            HistoryRecord::new(2, 10),
        ];
        let history = PairHistory::from_records(&records);

        assert_eq!(history.count(1, 10), 2);
        assert_eq!(history.count(1, 11), 1);
        assert_eq!(history.count(2, 11), 0);
        assert!(history.have_met(1, 10));
        assert!(!history.have_met(2, 11));

        assert_eq!(history.total_for(1), 3);
        assert_eq!(history.total_for(10), 3);
        assert_eq!(history.total_for(11), 1);
        assert_eq!(history.total_for(99), 0);
    }

    #[test]
    fn test_empty_history() {
        let history = PairHistory::default();
        assert_eq!(history.count(1, 2), 0);
        assert!(!history.have_met(1, 2));
    }
}
