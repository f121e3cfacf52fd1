//! Run diagnostics.
//!
//! Coverage and outcome statistics collected after the admission scan.
//! Everything here is observational: stats describe the run, they never
//! influence it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityIndex;
use crate::models::{Person, PersonId, ScheduledInterview};

/// Statistics for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Opportunities the finder produced.
    pub opportunities_considered: usize,
    /// Interviews admitted.
    pub scheduled: usize,
    /// Wall-clock time for the run (milliseconds).
    pub processing_ms: u64,
    /// Distinct actives appearing in admitted interviews.
    pub actives_used: usize,
    /// Actives with any availability this week.
    pub actives_with_availability: usize,
    /// Distinct pledges appearing in admitted interviews.
    pub pledges_used: usize,
    /// Pledges with any availability this week.
    pub pledges_with_availability: usize,
    /// Interview counts by group-size label ("2-on-2", "3-on-3").
    pub type_breakdown: BTreeMap<String, usize>,
    /// Every (active, pledge) pair with zero shared slots anywhere in
    /// the week, regardless of grouping, caps, or history.
    pub no_overlap_pairs: Vec<(PersonId, PersonId)>,
}

impl RunStats {
    /// Collects statistics from a finished run.
    ///
    /// `actives` and `pledges` are the full cohort rosters; pair order
    /// in `no_overlap_pairs` follows roster order.
    pub fn collect(
        interviews: &[ScheduledInterview],
        actives: &[Person],
        pledges: &[Person],
        index: &AvailabilityIndex,
        opportunities_considered: usize,
        processing_ms: u64,
    ) -> Self {
        let mut used_actives: HashSet<PersonId> = HashSet::new();
        let mut used_pledges: HashSet<PersonId> = HashSet::new();
        let mut type_breakdown: BTreeMap<String, usize> = BTreeMap::new();

        for interview in interviews {
            used_actives.extend(interview.active_ids.iter().copied());
            used_pledges.extend(interview.pledge_ids.iter().copied());
            *type_breakdown.entry(interview.label()).or_insert(0) += 1;
        }

        let mut no_overlap_pairs = Vec::new();
        for active in actives {
            for pledge in pledges {
                if !index.overlap_exists(active.id, pledge.id) {
                    no_overlap_pairs.push((active.id, pledge.id));
                }
            }
        }

        Self {
            opportunities_considered,
            scheduled: interviews.len(),
            processing_ms,
            actives_used: used_actives.len(),
            actives_with_availability: actives
                .iter()
                .filter(|p| index.has_availability(p.id))
                .count(),
            pledges_used: used_pledges.len(),
            pledges_with_availability: pledges
                .iter()
                .filter(|p| index.has_availability(p.id))
                .count(),
            type_breakdown,
            no_overlap_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AvailabilityRecord;
    use crate::models::{Person, TimeBlock, SLOT_SECONDS};

    const WEEK: i64 = 7 * 24 * 3600;

    fn interview(actives: Vec<PersonId>, pledges: Vec<PersonId>) -> ScheduledInterview {
        let size = actives.len();
        ScheduledInterview {
            active_ids: actives,
            pledge_ids: pledges,
            block: TimeBlock::new(0),
            group_size: size,
        }
    }

    #[test]
    fn test_collect_counts() {
        let actives = vec![
            Person::active(1, "A1"),
            Person::active(2, "A2"),
            Person::active(3, "A3"),
        ];
        let pledges = vec![Person::pledge(10, "P1"), Person::pledge(11, "P2")];
        let records = vec![
            AvailabilityRecord::new(1, 0),
            AvailabilityRecord::new(2, 0),
            AvailabilityRecord::new(10, 0),
            AvailabilityRecord::new(11, SLOT_SECONDS),
        ];
        let index = AvailabilityIndex::build(&records, 0, WEEK);
        let interviews = vec![interview(vec![1, 2], vec![10, 11])];

        let stats = RunStats::collect(&interviews, &actives, &pledges, &index, 4, 12);

        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.opportunities_considered, 4);
        assert_eq!(stats.processing_ms, 12);
        assert_eq!(stats.actives_used, 2);
        assert_eq!(stats.actives_with_availability, 2); // person 3 has none
        assert_eq!(stats.pledges_used, 2);
        assert_eq!(stats.pledges_with_availability, 2);
        assert_eq!(stats.type_breakdown.get("2-on-2"), Some(&1));
    }

    #[test]
    fn test_no_overlap_pairs_exact() {
        let actives = vec![Person::active(1, "A1"), Person::active(2, "A2")];
        let pledges = vec![Person::pledge(10, "P1"), Person::pledge(11, "P2")];
        // 1 overlaps 10 only; 2 has no availability and overlaps nobody.
        let records = vec![
            AvailabilityRecord::new(1, 0),
            AvailabilityRecord::new(10, 0),
            AvailabilityRecord::new(11, SLOT_SECONDS),
        ];
        let index = AvailabilityIndex::build(&records, 0, WEEK);

        let stats = RunStats::collect(&[], &actives, &pledges, &index, 0, 0);
        assert_eq!(
            stats.no_overlap_pairs,
            vec![(1, 11), (2, 10), (2, 11)]
        );
    }

    #[test]
    fn test_type_breakdown_mixed() {
        let actives: Vec<Person> = (1..=5).map(|i| Person::active(i, format!("A{i}"))).collect();
        let pledges: Vec<Person> =
            (10..=14).map(|i| Person::pledge(i, format!("P{i}"))).collect();
        let index = AvailabilityIndex::build(&[], 0, WEEK);

        let interviews = vec![
            interview(vec![1, 2], vec![10, 11]),
            interview(vec![3, 4, 5], vec![12, 13, 14]),
            interview(vec![1, 3], vec![12, 14]),
        ];
        let stats = RunStats::collect(&interviews, &actives, &pledges, &index, 3, 0);

        assert_eq!(stats.type_breakdown.get("2-on-2"), Some(&2));
        assert_eq!(stats.type_breakdown.get("3-on-3"), Some(&1));
    }

    #[test]
    fn test_empty_run() {
        let stats = RunStats::collect(
            &[],
            &[],
            &[],
            &AvailabilityIndex::default(),
            0,
            0,
        );
        assert_eq!(stats.scheduled, 0);
        assert_eq!(stats.actives_used, 0);
        assert!(stats.type_breakdown.is_empty());
        assert!(stats.no_overlap_pairs.is_empty());
    }
}
