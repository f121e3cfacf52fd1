//! People and cohorts.
//!
//! The engine pairs two fixed cohorts: actives (established members who
//! conduct interviews) and pledges (candidates being interviewed). A
//! roster entry is immutable for the duration of a run.

use serde::{Deserialize, Serialize};

/// Roster identifier for a person.
pub type PersonId = u32;

/// Which side of the pairing a person belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cohort {
    /// Established members who conduct interviews.
    Active,
    /// Candidates being interviewed.
    Pledge,
}

impl std::fmt::Display for Cohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cohort::Active => write!(f, "active"),
            Cohort::Pledge => write!(f, "pledge"),
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique roster id.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Cohort membership.
    pub cohort: Cohort,
    /// Flagged people are favored by the ordering when the engine runs
    /// with priority bias enabled. Only meaningful for actives.
    pub priority_bias: bool,
}

impl Person {
    /// Creates a roster entry.
    pub fn new(id: PersonId, name: impl Into<String>, cohort: Cohort) -> Self {
        Self {
            id,
            name: name.into(),
            cohort,
            priority_bias: false,
        }
    }

    /// Creates an active-cohort entry.
    pub fn active(id: PersonId, name: impl Into<String>) -> Self {
        Self::new(id, name, Cohort::Active)
    }

    /// Creates a pledge-cohort entry.
    pub fn pledge(id: PersonId, name: impl Into<String>) -> Self {
        Self::new(id, name, Cohort::Pledge)
    }

    /// Marks this person as priority-biased.
    pub fn with_priority_bias(mut self) -> Self {
        self.priority_bias = true;
        self
    }
}
