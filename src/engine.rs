//! Run orchestration.
//!
//! Wires the pipeline together: validate → index availability → generate
//! groups → find opportunities → admit greedily → collect stats. All
//! collaborator reads happen before any computation, all results are
//! handed back at the end, and the engine keeps no state between runs.

use std::collections::HashSet;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::availability::{AvailabilityIndex, AvailabilityRecord};
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::generator::GroupGenerator;
use crate::history::{HistoryRecord, PairHistory};
use crate::models::{Cohort, Person, PersonId, ScheduledInterview};
use crate::scheduler::{OpportunityFinder, PriorityScheduler, RunStats};
use crate::stores::{AvailabilityStore, HistoryStore};
use crate::trace::TraceLog;
use crate::validation;

/// Snapshot input for one scheduling run.
#[derive(Debug, Clone)]
pub struct PairingRequest {
    /// Everyone eligible this week, both cohorts.
    pub roster: Vec<Person>,
    /// Raw availability records; anything outside the target week is
    /// dropped during indexing.
    pub availability: Vec<AvailabilityRecord>,
    /// Completed-meeting records, one per occurrence.
    pub history: Vec<HistoryRecord>,
    /// Run configuration.
    pub config: SchedulerConfig,
}

impl PairingRequest {
    /// Creates a request with empty availability and history.
    pub fn new(roster: Vec<Person>, config: SchedulerConfig) -> Self {
        Self {
            roster,
            availability: Vec::new(),
            history: Vec::new(),
            config,
        }
    }

    /// Sets the availability snapshot.
    pub fn with_availability(mut self, records: Vec<AvailabilityRecord>) -> Self {
        self.availability = records;
        self
    }

    /// Sets the history snapshot.
    pub fn with_history(mut self, records: Vec<HistoryRecord>) -> Self {
        self.history = records;
        self
    }
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Admitted interviews, in admission order.
    pub interviews: Vec<ScheduledInterview>,
    /// Run diagnostics.
    pub stats: RunStats,
    /// Human-readable step log; empty unless tracing was enabled.
    pub trace: Vec<String>,
}

/// The pairing engine. Stateless; one instance can serve any number of
/// sequential runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairingEngine;

impl PairingEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline over a snapshot request.
    ///
    /// A run that admits nothing still returns `Ok` with empty results;
    /// errors are reserved for rejected inputs.
    pub fn run(&self, request: &PairingRequest) -> Result<RunOutcome, ScheduleError> {
        let started = Instant::now();
        let config = &request.config;
        validation::validate(&request.roster, config)?;

        let mut trace = TraceLog::new(config.trace);

        let index =
            AvailabilityIndex::build(&request.availability, config.week_start, config.week_end);
        let history = PairHistory::from_records(&request.history);

        let seed = config
            .random_seed
            .unwrap_or_else(|| rand::rng().random());
        let mut rng = SmallRng::seed_from_u64(seed);
        trace.record(|| format!("run seed {seed}"));

        let actives: Vec<Person> = request
            .roster
            .iter()
            .filter(|p| p.cohort == Cohort::Active)
            .cloned()
            .collect();
        let pledges: Vec<Person> = request
            .roster
            .iter()
            .filter(|p| p.cohort == Cohort::Pledge)
            .cloned()
            .collect();
        log::debug!(
            "run over {} actives, {} pledges, {} availability records, {} history records",
            actives.len(),
            pledges.len(),
            request.availability.len(),
            request.history.len()
        );
        trace.record(|| {
            format!(
                "loaded {} actives and {} pledges",
                actives.len(),
                pledges.len()
            )
        });

        let biased: HashSet<PersonId> = actives
            .iter()
            .filter(|p| p.priority_bias)
            .map(|p| p.id)
            .collect();

        // Shuffled member order removes roster-position bias from group
        // generation; the seed keeps it reproducible.
        let mut active_ids: Vec<PersonId> = actives.iter().map(|p| p.id).collect();
        let mut pledge_ids: Vec<PersonId> = pledges.iter().map(|p| p.id).collect();
        active_ids.shuffle(&mut rng);
        pledge_ids.shuffle(&mut rng);

        // With a pool cap, keep the members the scan most wants: biased
        // actives first (when enabled), then fewest past meetings. The
        // stable sort leaves the shuffled order as the final tie-break.
        let mut generator = GroupGenerator::new(&config.group_sizes);
        if let Some(cap) = config.candidate_pool_cap {
            active_ids.sort_by_key(|id| {
                let bias_rank = if config.priority_bias && biased.contains(id) {
                    0u8
                } else {
                    1
                };
                (bias_rank, history.total_for(*id))
            });
            pledge_ids.sort_by_key(|id| history.total_for(*id));
            generator = generator.with_pool_cap(cap);
        }

        let active_groups = generator.generate(Cohort::Active, &active_ids, &index);
        let pledge_groups = generator.generate(Cohort::Pledge, &pledge_ids, &index);
        log::debug!(
            "generated {} active groups, {} pledge groups",
            active_groups.len(),
            pledge_groups.len()
        );
        trace.record(|| {
            format!(
                "generated {} active and {} pledge combinations",
                active_groups.len(),
                pledge_groups.len()
            )
        });

        let finder = OpportunityFinder::new(&index, &history).with_biased(biased);
        let opportunities = finder.find(&active_groups, &pledge_groups);
        log::debug!("found {} interview opportunities", opportunities.len());
        trace.record(|| format!("found {} interview opportunities", opportunities.len()));

        let scheduler = PriorityScheduler::from_config(config);
        let (interviews, examined) =
            scheduler.schedule(&opportunities, &history, &mut rng, &mut trace);
        log::debug!(
            "admitted {} interviews after examining {examined} opportunities",
            interviews.len()
        );

        let stats = RunStats::collect(
            &interviews,
            &actives,
            &pledges,
            &index,
            opportunities.len(),
            started.elapsed().as_millis() as u64,
        );
        trace.record(|| {
            format!(
                "finished in {}ms: {} interviews, {} of {} actives used, {} of {} pledges used",
                stats.processing_ms,
                stats.scheduled,
                stats.actives_used,
                stats.actives_with_availability,
                stats.pledges_used,
                stats.pledges_with_availability,
            )
        });

        Ok(RunOutcome {
            interviews,
            stats,
            trace: trace.into_lines(),
        })
    }

    /// Runs against external collaborators.
    ///
    /// Validates first, then reads each store exactly once; a failed
    /// read aborts with no partial schedule.
    pub fn run_with_stores(
        &self,
        roster: Vec<Person>,
        availability: &dyn AvailabilityStore,
        history: &dyn HistoryStore,
        config: SchedulerConfig,
    ) -> Result<RunOutcome, ScheduleError> {
        validation::validate(&roster, &config)?;
        let availability = availability.query(config.week_start, config.week_end)?;
        let history = history.query()?;
        self.run(&PairingRequest {
            roster,
            availability,
            history,
            config,
        })
    }
}
