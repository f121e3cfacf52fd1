//! Error taxonomy for scheduling runs.
//!
//! A run that admits zero interviews is NOT an error: it returns `Ok`
//! with empty results and full stats. Errors are reserved for inputs the
//! engine refuses to compute on and collaborators it cannot read.

use thiserror::Error;

use crate::models::{Cohort, PersonId, SlotTime};

/// Rejected configuration or roster, detected before any computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// One of the two cohorts has no roster entries.
    #[error("roster has no {0} members")]
    EmptyCohort(Cohort),
    /// The target week range is empty or inverted.
    #[error("malformed week range: start {start} must precede end {end}")]
    MalformedWeek { start: SlotTime, end: SlotTime },
    /// Requested group sizes outside {2, 3}, or none at all.
    #[error("group sizes must be a non-empty subset of {{2, 3}}, got {0:?}")]
    InvalidGroupSizes(Vec<usize>),
    /// Two roster entries share an id.
    #[error("duplicate person id {0} in roster")]
    DuplicatePersonId(PersonId),
}

/// A collaborator read failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage read failed: {0}")]
pub struct StoreError(pub String);

/// Anything that aborts a scheduling run. No partial schedule is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Validation rejected the roster or configuration.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The availability or history collaborator could not be read.
    #[error(transparent)]
    StorageRead(#[from] StoreError),
}
