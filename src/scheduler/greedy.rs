//! Greedy constrained admission.
//!
//! A single pass over priority-ordered opportunities. This is not an
//! optimal matching: an opportunity can lose its participants or slots
//! to higher-priority ones admitted earlier, and nothing is revisited.
//!
//! # Ordering
//! Fewest prior meetings first, then (when priority bias is enabled)
//! fewest unbiased seats, then earliest block, then a random tie key
//! drawn once per opportunity before sorting. The comparator itself
//! never draws randomness: a fresh draw per comparison is not a total
//! order and makes the sort platform-dependent.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::config::{RepeatPolicy, SchedulerConfig};
use crate::history::PairHistory;
use crate::models::{Opportunity, PersonId, ScheduledInterview, SlotTime};
use crate::trace::TraceLog;

/// Why an opportunity was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A participant already holds one of the block's slots.
    Conflict,
    /// A participant is at their per-role weekly cap.
    LimitExceeded,
    /// A cross-pair has already met (hard repeat policy only).
    Repeat,
}

/// Mutable bookkeeping owned by one admission scan.
///
/// Everything the scan learns lives here, never in module state, so a
/// scan that stops early still leaves a consistent result behind.
#[derive(Debug, Default)]
struct AdmissionLedger {
    /// (slot, person) claims from admitted interviews.
    used_slots: HashSet<(SlotTime, PersonId)>,
    /// Admitted-interview count per person.
    counts: HashMap<PersonId, usize>,
    /// (active, pledge) pairs admitted this run.
    run_pairs: HashSet<(PersonId, PersonId)>,
}

/// Admits opportunities in priority order under capacity, conflict, and
/// repeat constraints.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    global_cap: usize,
    per_active_cap: usize,
    per_pledge_cap: usize,
    repeat_policy: RepeatPolicy,
    priority_bias: bool,
    scan_budget: Option<usize>,
}

impl PriorityScheduler {
    /// Creates a scheduler from the run configuration.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            global_cap: config.global_cap,
            per_active_cap: config.per_active_cap,
            per_pledge_cap: config.per_pledge_cap,
            repeat_policy: config.repeat_policy,
            priority_bias: config.priority_bias,
            scan_budget: config.scan_budget,
        }
    }

    /// Sorts the opportunities and scans them once, admitting greedily.
    ///
    /// Returns the admitted interviews in admission order and the number
    /// of opportunities examined before the scan ended.
    pub fn schedule<R: Rng>(
        &self,
        opportunities: &[Opportunity],
        history: &PairHistory,
        rng: &mut R,
        trace: &mut TraceLog,
    ) -> (Vec<ScheduledInterview>, usize) {
        // Stable tie keys, drawn up front.
        let tie_keys: Vec<u64> = opportunities.iter().map(|_| rng.random()).collect();
        let mut order: Vec<usize> = (0..opportunities.len()).collect();
        order.sort_by_key(|&i| {
            let op = &opportunities[i];
            let bias = if self.priority_bias { op.bias_deficit } else { 0 };
            (op.prior_meetings, bias, op.block.start, tie_keys[i])
        });

        let mut ledger = AdmissionLedger::default();
        let mut admitted: Vec<ScheduledInterview> = Vec::new();
        let mut examined = 0usize;

        for &i in &order {
            if admitted.len() >= self.global_cap {
                trace.record(|| {
                    format!("stopped: reached the cap of {} interviews", self.global_cap)
                });
                break;
            }
            if let Some(budget) = self.scan_budget {
                if examined >= budget {
                    trace.record(|| {
                        format!("stopped: scan budget of {budget} opportunities exhausted")
                    });
                    break;
                }
            }
            examined += 1;

            let op = &opportunities[i];
            match self.try_admit(op, history, &mut ledger) {
                Ok(interview) => {
                    trace.record(|| {
                        format!(
                            "scheduled {}: actives {:?} with pledges {:?} at {} ({} prior meetings, {} blocks available)",
                            interview.label(),
                            interview.active_ids,
                            interview.pledge_ids,
                            interview.block.start,
                            op.prior_meetings,
                            op.available_blocks,
                        )
                    });
                    admitted.push(interview);
                }
                Err(RejectReason::Repeat) => {
                    trace.record(|| {
                        format!(
                            "skipped repeat pairing: actives {:?} with pledges {:?}",
                            op.active_group.members, op.pledge_group.members
                        )
                    });
                }
                Err(_) => {}
            }
        }

        (admitted, examined)
    }

    /// Runs the admission test; commits the ledger updates on success.
    fn try_admit(
        &self,
        op: &Opportunity,
        history: &PairHistory,
        ledger: &mut AdmissionLedger,
    ) -> Result<ScheduledInterview, RejectReason> {
        for &pid in &op.participant_ids {
            for slot in op.block.slots() {
                if ledger.used_slots.contains(&(slot, pid)) {
                    return Err(RejectReason::Conflict);
                }
            }
        }

        for &a in &op.active_group.members {
            if ledger.counts.get(&a).copied().unwrap_or(0) >= self.per_active_cap {
                return Err(RejectReason::LimitExceeded);
            }
        }
        for &p in &op.pledge_group.members {
            if ledger.counts.get(&p).copied().unwrap_or(0) >= self.per_pledge_cap {
                return Err(RejectReason::LimitExceeded);
            }
        }

        if self.repeat_policy == RepeatPolicy::RejectAnyRepeat {
            for (a, p) in op.cross_pairs() {
                if history.have_met(a, p) || ledger.run_pairs.contains(&(a, p)) {
                    return Err(RejectReason::Repeat);
                }
            }
        }

        // Admission: claim both slots for everyone, bump counters, and
        // remember the cross-pairs for in-run repeat avoidance.
        for &pid in &op.participant_ids {
            for slot in op.block.slots() {
                ledger.used_slots.insert((slot, pid));
            }
            *ledger.counts.entry(pid).or_insert(0) += 1;
        }
        for pair in op.cross_pairs() {
            ledger.run_pairs.insert(pair);
        }

        Ok(ScheduledInterview {
            active_ids: op.active_group.members.clone(),
            pledge_ids: op.pledge_group.members.clone(),
            block: op.block,
            group_size: op.group_size(),
        })
    }
}
