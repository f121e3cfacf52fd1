//! Engine-level invariants over randomized inputs.
//!
//! Each case builds a random roster, availability grid, and history,
//! runs the engine, and checks the guarantees that must hold for every
//! input: no double-booking, matched group sizes, cap compliance,
//! repeat avoidance, determinism under a fixed seed, and exactness of
//! the no-overlap diagnostic.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use interview_scheduler::availability::AvailabilityRecord;
use interview_scheduler::config::{RepeatPolicy, SchedulerConfig};
use interview_scheduler::engine::{PairingEngine, PairingRequest};
use interview_scheduler::history::HistoryRecord;
use interview_scheduler::models::{Person, PersonId, SLOT_SECONDS};

const WEEK: i64 = 7 * 24 * 3600;
const GRID_SLOTS: u32 = 10;

/// Builds availability records for one person from a 10-bit mask over a
/// morning slot grid.
fn records_from_mask(id: PersonId, mask: u16) -> Vec<AvailabilityRecord> {
    (0..GRID_SLOTS)
        .filter(|bit| ((mask >> bit) & 1) != 0)
        .map(|bit| AvailabilityRecord::new(id, 9 * 3600 + i64::from(bit) * SLOT_SECONDS))
        .collect()
}

#[derive(Debug, Clone)]
struct Case {
    roster: Vec<Person>,
    availability: Vec<AvailabilityRecord>,
    history: Vec<HistoryRecord>,
    config: SchedulerConfig,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (
        2usize..6,
        2usize..6,
        proptest::collection::vec(0u16..(1 << GRID_SLOTS), 12),
        proptest::collection::vec((0usize..6, 0usize..6), 0..8),
        any::<u64>(),
        any::<bool>(),
        0usize..8,
        0usize..4,
    )
        .prop_map(
            |(n_actives, n_pledges, masks, history_seeds, seed, triples, global_cap, per_cap)| {
                let active_ids: Vec<PersonId> = (1..=n_actives as PersonId).collect();
                let pledge_ids: Vec<PersonId> =
                    (101..=(100 + n_pledges as PersonId)).collect();

                let roster: Vec<Person> = active_ids
                    .iter()
                    .map(|&id| Person::active(id, format!("A{id}")))
                    .chain(
                        pledge_ids
                            .iter()
                            .map(|&id| Person::pledge(id, format!("P{id}"))),
                    )
                    .collect();

                let availability: Vec<AvailabilityRecord> = roster
                    .iter()
                    .enumerate()
                    .flat_map(|(i, p)| records_from_mask(p.id, masks[i]))
                    .collect();

                let history: Vec<HistoryRecord> = history_seeds
                    .iter()
                    .map(|&(a, p)| {
                        HistoryRecord::new(
                            active_ids[a % n_actives],
                            pledge_ids[p % n_pledges],
                        )
                    })
                    .collect();

                let sizes = if triples { vec![2, 3] } else { vec![2] };
                let config = SchedulerConfig::new(0, WEEK)
                    .with_group_sizes(sizes)
                    .with_global_cap(global_cap)
                    .with_per_active_cap(per_cap)
                    .with_per_pledge_cap(per_cap)
                    .with_seed(seed);

                Case {
                    roster,
                    availability,
                    history,
                    config,
                }
            },
        )
}

fn run(case: &Case) -> interview_scheduler::engine::RunOutcome {
    let request = PairingRequest::new(case.roster.clone(), case.config.clone())
        .with_availability(case.availability.clone())
        .with_history(case.history.clone());
    PairingEngine::new().run(&request).unwrap()
}

proptest! {
    #[test]
    fn admitted_interviews_respect_all_caps_and_conflicts(case in case_strategy()) {
        let outcome = run(&case);

        // Total cap.
        prop_assert!(outcome.interviews.len() <= case.config.global_cap);

        let mut used_slots: HashSet<(i64, PersonId)> = HashSet::new();
        let mut counts: HashMap<PersonId, usize> = HashMap::new();

        for interview in &outcome.interviews {
            // Matched sizes in {2, 3}.
            prop_assert!(interview.group_size == 2 || interview.group_size == 3);
            prop_assert_eq!(interview.active_ids.len(), interview.group_size);
            prop_assert_eq!(interview.pledge_ids.len(), interview.group_size);

            // No person holds the same slot twice across the schedule;
            // slot-level uniqueness implies no overlapping blocks.
            for pid in interview.participants() {
                *counts.entry(pid).or_insert(0) += 1;
                for slot in interview.block.slots() {
                    prop_assert!(
                        used_slots.insert((slot, pid)),
                        "person {} double-booked at {}",
                        pid,
                        slot
                    );
                }
            }
        }

        // Per-role caps.
        for person in &case.roster {
            let cap = match person.cohort {
                interview_scheduler::models::Cohort::Active => case.config.per_active_cap,
                interview_scheduler::models::Cohort::Pledge => case.config.per_pledge_cap,
            };
            prop_assert!(counts.get(&person.id).copied().unwrap_or(0) <= cap);
        }
    }

    #[test]
    fn hard_repeat_policy_never_repairs_met_pairs(case in case_strategy()) {
        // Default policy is RejectAnyRepeat.
        let outcome = run(&case);

        let met: HashSet<(PersonId, PersonId)> = case
            .history
            .iter()
            .map(|r| (r.active_id, r.pledge_id))
            .collect();

        let mut run_pairs: HashSet<(PersonId, PersonId)> = HashSet::new();
        for interview in &outcome.interviews {
            for &a in &interview.active_ids {
                for &p in &interview.pledge_ids {
                    prop_assert!(!met.contains(&(a, p)), "re-paired {a} with {p}");
                    prop_assert!(run_pairs.insert((a, p)), "paired {a} with {p} twice");
                }
            }
        }
    }

    #[test]
    fn soft_policy_still_respects_caps(case in case_strategy()) {
        let mut case = case;
        case.config.repeat_policy = RepeatPolicy::SoftPriorityOnly;
        let outcome = run(&case);
        prop_assert!(outcome.interviews.len() <= case.config.global_cap);
    }

    #[test]
    fn identical_inputs_and_seed_give_identical_schedules(case in case_strategy()) {
        let first = run(&case);
        let second = run(&case);
        prop_assert_eq!(first.interviews, second.interviews);
        prop_assert_eq!(first.stats.no_overlap_pairs, second.stats.no_overlap_pairs);
        prop_assert_eq!(first.stats.type_breakdown, second.stats.type_breakdown);
    }

    #[test]
    fn no_overlap_pairs_is_exact(case in case_strategy()) {
        let outcome = run(&case);

        // Recompute naively from the raw records.
        let mut slots: HashMap<PersonId, HashSet<i64>> = HashMap::new();
        for r in &case.availability {
            slots.entry(r.person_id).or_default().insert(r.slot_start);
        }
        let empty = HashSet::new();

        let mut expected: HashSet<(PersonId, PersonId)> = HashSet::new();
        for active in case.roster.iter().filter(|p| {
            p.cohort == interview_scheduler::models::Cohort::Active
        }) {
            for pledge in case.roster.iter().filter(|p| {
                p.cohort == interview_scheduler::models::Cohort::Pledge
            }) {
                let sa = slots.get(&active.id).unwrap_or(&empty);
                let sp = slots.get(&pledge.id).unwrap_or(&empty);
                if sa.intersection(sp).next().is_none() {
                    expected.insert((active.id, pledge.id));
                }
            }
        }

        let reported: HashSet<(PersonId, PersonId)> =
            outcome.stats.no_overlap_pairs.iter().copied().collect();
        prop_assert_eq!(reported, expected);
    }
}
