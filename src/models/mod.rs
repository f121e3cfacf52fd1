//! Domain models for interview pairing.
//!
//! Core data types shared across the pipeline: roster entries, time
//! slots and blocks, same-cohort groups, candidate opportunities, and
//! admitted interviews.

mod group;
mod interview;
mod opportunity;
mod person;
mod slot;

pub use group::Group;
pub use interview::ScheduledInterview;
pub use opportunity::Opportunity;
pub use person::{Cohort, Person, PersonId};
pub use slot::{SlotTime, TimeBlock, BLOCK_SECONDS, SLOT_SECONDS};
