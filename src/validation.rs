//! Entry-time input checks.
//!
//! Runs once before any computation; the first violation aborts the run
//! with a descriptive reason. A configuration that merely produces
//! nothing (zero caps, nobody available) passes validation — emptiness
//! is an outcome, not an input defect.

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::error::InputError;
use crate::models::{Cohort, Person};

/// Validates the roster and configuration for a run.
///
/// Checks, in order:
/// 1. The week range is non-empty.
/// 2. Group sizes are a non-empty subset of {2, 3}.
/// 3. Roster ids are unique.
/// 4. Both cohorts have at least one member.
pub fn validate(roster: &[Person], config: &SchedulerConfig) -> Result<(), InputError> {
    if config.week_start >= config.week_end {
        return Err(InputError::MalformedWeek {
            start: config.week_start,
            end: config.week_end,
        });
    }

    if config.group_sizes.is_empty()
        || config.group_sizes.iter().any(|&k| k != 2 && k != 3)
    {
        return Err(InputError::InvalidGroupSizes(config.group_sizes.clone()));
    }

    let mut seen = HashSet::new();
    for person in roster {
        if !seen.insert(person.id) {
            return Err(InputError::DuplicatePersonId(person.id));
        }
    }

    for cohort in [Cohort::Active, Cohort::Pledge] {
        if !roster.iter().any(|p| p.cohort == cohort) {
            return Err(InputError::EmptyCohort(cohort));
        }
    }

    Ok(())
}
