//! Run configuration.
//!
//! One engine, one configuration surface. Historically divergent
//! behaviors (hard vs. soft repeat avoidance, optional triples,
//! priority-biased actives, candidate-pool capping) are all knobs here
//! rather than forked code paths.

use serde::{Deserialize, Serialize};

use crate::models::SlotTime;

/// How previously-met pairs are treated during admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatPolicy {
    /// Any active × pledge pair that has met, in persisted history or
    /// earlier in this run, disqualifies the whole opportunity.
    #[default]
    RejectAnyRepeat,
    /// Prior meetings only lower priority through the ordering; nothing
    /// is hard-rejected.
    SoftPriorityOnly,
}

/// Knobs for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Start of the target week (unix seconds, inclusive).
    pub week_start: SlotTime,
    /// End of the target week (unix seconds, exclusive).
    pub week_end: SlotTime,
    /// Group sizes to enumerate; non-empty subset of {2, 3}. Triples are
    /// cubic in cohort size, so leave 3 out for large rosters.
    pub group_sizes: Vec<usize>,
    /// Cap on total admitted interviews. Zero is a valid degenerate
    /// configuration and yields an empty run, not an error.
    pub global_cap: usize,
    /// Per-active admitted-interview cap for the week.
    pub per_active_cap: usize,
    /// Per-pledge admitted-interview cap for the week.
    pub per_pledge_cap: usize,
    /// Repeat-avoidance policy.
    pub repeat_policy: RepeatPolicy,
    /// Fixed seed for reproducible runs. `None` draws a fresh seed; the
    /// drawn value is reported in the trace.
    pub random_seed: Option<u64>,
    /// Record a human-readable step log alongside the result.
    pub trace: bool,
    /// Order groups containing priority-biased actives ahead of equally
    /// scored ones.
    pub priority_bias: bool,
    /// Truncate each availability-filtered cohort to its top N members
    /// before combination generation. The documented control for the
    /// cubic cost of triples.
    pub candidate_pool_cap: Option<usize>,
    /// Ceiling on opportunities the admission scan may examine. When
    /// exhausted the scan stops and returns what it has admitted.
    pub scan_budget: Option<usize>,
}

impl SchedulerConfig {
    /// Creates a configuration for the given week with the historical
    /// defaults: sizes {2, 3}, global cap 50, per-person caps 5, hard
    /// repeat avoidance.
    pub fn new(week_start: SlotTime, week_end: SlotTime) -> Self {
        Self {
            week_start,
            week_end,
            group_sizes: vec![2, 3],
            global_cap: 50,
            per_active_cap: 5,
            per_pledge_cap: 5,
            repeat_policy: RepeatPolicy::default(),
            random_seed: None,
            trace: false,
            priority_bias: false,
            candidate_pool_cap: None,
            scan_budget: None,
        }
    }

    /// Sets the group sizes to enumerate.
    pub fn with_group_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.group_sizes = sizes;
        self
    }

    /// Sets the global interview cap.
    pub fn with_global_cap(mut self, cap: usize) -> Self {
        self.global_cap = cap;
        self
    }

    /// Sets the per-active cap.
    pub fn with_per_active_cap(mut self, cap: usize) -> Self {
        self.per_active_cap = cap;
        self
    }

    /// Sets the per-pledge cap.
    pub fn with_per_pledge_cap(mut self, cap: usize) -> Self {
        self.per_pledge_cap = cap;
        self
    }

    /// Sets the repeat-avoidance policy.
    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Enables the step trace.
    pub fn with_trace(mut self) -> Self {
        self.trace = true;
        self
    }

    /// Enables priority-biased ordering.
    pub fn with_priority_bias(mut self) -> Self {
        self.priority_bias = true;
        self
    }

    /// Caps the candidate pool per cohort.
    pub fn with_candidate_pool_cap(mut self, cap: usize) -> Self {
        self.candidate_pool_cap = Some(cap);
        self
    }

    /// Bounds the number of opportunities the scan examines.
    pub fn with_scan_budget(mut self, budget: usize) -> Self {
        self.scan_budget = Some(budget);
        self
    }
}
