//! Same-cohort group enumeration.
//!
//! Produces every size-k combination (k ∈ {2, 3}) of cohort members who
//! have any availability at all. Members with no recorded slots are
//! pruned before enumeration.
//!
//! # Complexity
//! O(n²) for pairs and O(n³) for triples over the availability-filtered
//! cohort size n. Triples dominate quickly: past a few dozen members per
//! cohort, set a pool cap or drop size 3 from the configuration.
//!
//! # Reference
//! Knuth (2011), TAOCP 4A, §7.2.1.3 (generating combinations)

use crate::availability::AvailabilityIndex;
use crate::models::{Cohort, Group, PersonId};

/// Enumerates candidate groups for one cohort.
#[derive(Debug, Clone)]
pub struct GroupGenerator {
    sizes: Vec<usize>,
    pool_cap: Option<usize>,
}

impl GroupGenerator {
    /// Creates a generator for the given sizes (deduplicated, ascending).
    ///
    /// Sizes must already be validated to the {2, 3} domain.
    pub fn new(sizes: &[usize]) -> Self {
        let mut sizes = sizes.to_vec();
        sizes.sort_unstable();
        sizes.dedup();
        Self {
            sizes,
            pool_cap: None,
        }
    }

    /// Truncates each pruned member list to its first `cap` entries.
    ///
    /// Callers pass members in priority order, so the cap keeps the
    /// members the admission scan most wants to see.
    pub fn with_pool_cap(mut self, cap: usize) -> Self {
        self.pool_cap = Some(cap);
        self
    }

    /// Enumerates all groups over the members that have availability.
    ///
    /// Member order is preserved into the generated groups: pairs come
    /// out before triples, each in lexicographic index order.
    pub fn generate(
        &self,
        cohort: Cohort,
        members: &[PersonId],
        index: &AvailabilityIndex,
    ) -> Vec<Group> {
        let mut pool: Vec<PersonId> = members
            .iter()
            .copied()
            .filter(|&id| index.has_availability(id))
            .collect();
        if let Some(cap) = self.pool_cap {
            pool.truncate(cap);
        }

        let mut groups = Vec::new();
        for &k in &self.sizes {
            match k {
                2 => {
                    for i in 0..pool.len() {
                        for j in (i + 1)..pool.len() {
                            groups.push(Group::new(cohort, vec![pool[i], pool[j]]));
                        }
                    }
                }
                3 => {
                    for i in 0..pool.len() {
                        for j in (i + 1)..pool.len() {
                            for l in (j + 1)..pool.len() {
                                groups.push(Group::new(
                                    cohort,
                                    vec![pool[i], pool[j], pool[l]],
                                ));
                            }
                        }
                    }
                }
                // Validation rejects anything else before a run starts.
                _ => {}
            }
        }
        groups
    }
}
