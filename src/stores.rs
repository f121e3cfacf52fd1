//! Collaborator read seams.
//!
//! The engine reads roster, availability, and history exactly once, up
//! front, and never writes; persisting the produced schedule belongs to
//! the caller. These traits are the read seam, with Vec-backed
//! implementations for callers that already hold snapshots.
//!
//! Cross-run coordination (locking against a concurrent run that could
//! double-book people) also lives behind these collaborators, not in
//! the engine.

use crate::availability::AvailabilityRecord;
use crate::error::StoreError;
use crate::history::HistoryRecord;
use crate::models::SlotTime;

/// Supplies availability records for a date range.
pub trait AvailabilityStore {
    /// All 30-minute slot records inside `[week_start, week_end)`.
    fn query(
        &self,
        week_start: SlotTime,
        week_end: SlotTime,
    ) -> Result<Vec<AvailabilityRecord>, StoreError>;
}

/// Supplies the completed-meeting history.
pub trait HistoryStore {
    /// Every completed meeting, one record per occurrence.
    fn query(&self) -> Result<Vec<HistoryRecord>, StoreError>;
}

/// Availability store over an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryAvailabilityStore {
    /// The snapshot records.
    pub records: Vec<AvailabilityRecord>,
}

impl MemoryAvailabilityStore {
    /// Wraps a snapshot.
    pub fn new(records: Vec<AvailabilityRecord>) -> Self {
        Self { records }
    }
}

impl AvailabilityStore for MemoryAvailabilityStore {
    fn query(
        &self,
        week_start: SlotTime,
        week_end: SlotTime,
    ) -> Result<Vec<AvailabilityRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .copied()
            .filter(|r| r.slot_start >= week_start && r.slot_start < week_end)
            .collect())
    }
}

/// History store over an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    /// The snapshot records.
    pub records: Vec<HistoryRecord>,
}

impl MemoryHistoryStore {
    /// Wraps a snapshot.
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn query(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
