//! Same-cohort interview groups.

use serde::{Deserialize, Serialize};

use super::{Cohort, PersonId};

/// An ordered set of distinct people from one cohort.
///
/// Groups are size 2 or 3 and are only ever matched against a group of
/// the same size from the other cohort. The generator guarantees
/// distinctness; the order is whatever candidate order it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Cohort every member belongs to.
    pub cohort: Cohort,
    /// Member ids, pairwise distinct.
    pub members: Vec<PersonId>,
}

impl Group {
    /// Creates a group from an ordered member list.
    pub fn new(cohort: Cohort, members: Vec<PersonId>) -> Self {
        Self { cohort, members }
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the given person is in this group.
    pub fn contains(&self, id: PersonId) -> bool {
        self.members.contains(&id)
    }
}
