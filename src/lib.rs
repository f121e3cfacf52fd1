//! Pairing engine for small-group interviews.
//!
//! Assigns one-hour meetings between equal-sized groups from two
//! cohorts — actives (who conduct interviews) and pledges (who are
//! interviewed) — for a target week, under availability, capacity, and
//! repeat-avoidance constraints.
//!
//! # Pipeline
//!
//! Data flows strictly forward:
//!
//! availability + roster → [`availability::AvailabilityIndex`] →
//! [`generator::GroupGenerator`] → [`scheduler::OpportunityFinder`] →
//! [`scheduler::PriorityScheduler`] → interviews + [`scheduler::RunStats`]
//!
//! # Algorithm
//!
//! Combinatorial group enumeration, slot-set intersection, priority
//! ordering, and a single-pass greedy admission. The result is a good
//! conflict-free schedule, not a guaranteed-optimal matching; the
//! trade-off buys a simple, predictable engine that finishes in
//! milliseconds on realistic rosters.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Person`, `Cohort`, `TimeBlock`,
//!   `Group`, `Opportunity`, `ScheduledInterview`
//! - **`availability`** / **`history`**: per-person slot index and
//!   persisted meeting counts
//! - **`generator`** / **`scheduler`**: group enumeration, opportunity
//!   discovery, greedy admission, run diagnostics
//! - **`config`** / **`validation`** / **`error`**: the configuration
//!   surface, entry checks, and error taxonomy
//! - **`stores`**: read seams for the availability and history
//!   collaborators
//! - **`engine`**: the orchestration entry point
//!
//! # Example
//!
//! ```
//! use interview_scheduler::availability::AvailabilityRecord;
//! use interview_scheduler::config::SchedulerConfig;
//! use interview_scheduler::engine::{PairingEngine, PairingRequest};
//! use interview_scheduler::models::Person;
//!
//! let roster = vec![
//!     Person::active(1, "Alex"),
//!     Person::active(2, "Brooke"),
//!     Person::pledge(10, "Pari"),
//!     Person::pledge(11, "Sonny"),
//! ];
//! // Everyone is free for the same two adjacent half-hour slots.
//! let availability: Vec<_> = [1, 2, 10, 11]
//!     .into_iter()
//!     .flat_map(|id| {
//!         [
//!             AvailabilityRecord::new(id, 32_400),
//!             AvailabilityRecord::new(id, 34_200),
//!         ]
//!     })
//!     .collect();
//!
//! let config = SchedulerConfig::new(0, 7 * 24 * 3600)
//!     .with_group_sizes(vec![2])
//!     .with_seed(42);
//! let request = PairingRequest::new(roster, config).with_availability(availability);
//!
//! let outcome = PairingEngine::new().run(&request).unwrap();
//! assert_eq!(outcome.interviews.len(), 1);
//! assert_eq!(outcome.interviews[0].label(), "2-on-2");
//! ```

pub mod availability;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod history;
pub mod models;
pub mod scheduler;
pub mod stores;
pub mod trace;
pub mod validation;
