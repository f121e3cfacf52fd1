//! Time slots and meeting blocks.
//!
//! # Time Model
//! All times are unix timestamps in seconds. Availability arrives as
//! 30-minute slots aligned to the half hour; an interview occupies two
//! adjacent slots, one contiguous hour.

use serde::{Deserialize, Serialize};

/// Start of a 30-minute availability slot (unix seconds).
pub type SlotTime = i64;

/// Length of one availability slot.
pub const SLOT_SECONDS: i64 = 1800;

/// Length of one interview block (two adjacent slots).
pub const BLOCK_SECONDS: i64 = 2 * SLOT_SECONDS;

/// A one-hour meeting window made of two adjacent 30-minute slots.
///
/// Only the first slot is stored; the second is derived, so the
/// adjacency invariant holds by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeBlock {
    /// Start of the first slot (unix seconds).
    pub start: SlotTime,
}

impl TimeBlock {
    /// Creates a block starting at the given slot.
    pub fn new(start: SlotTime) -> Self {
        Self { start }
    }

    /// Start of the second slot.
    #[inline]
    pub fn second_slot(&self) -> SlotTime {
        self.start + SLOT_SECONDS
    }

    /// End of the block (exclusive).
    #[inline]
    pub fn end(&self) -> SlotTime {
        self.start + BLOCK_SECONDS
    }

    /// The two slot timestamps this block occupies.
    #[inline]
    pub fn slots(&self) -> [SlotTime; 2] {
        [self.start, self.second_slot()]
    }

    /// Whether two blocks share any time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}
