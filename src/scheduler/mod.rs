//! Opportunity discovery and greedy admission.
//!
//! # Algorithm
//!
//! `OpportunityFinder` cross-joins equal-sized groups from the two
//! cohorts and keeps the combinations that share a one-hour block.
//! `PriorityScheduler` sorts those opportunities (fewest prior meetings
//! first) and admits them in a single greedy pass under capacity,
//! conflict, and repeat constraints. Greedy means fast and good, not
//! optimal: an early admission can block a later, globally better one.
//!
//! # Reference
//!
//! - Korte & Vygen (2018), "Combinatorial Optimization", Ch. 10 (greedy
//!   vs. optimal matching)

mod finder;
mod greedy;
mod stats;

pub use finder::OpportunityFinder;
pub use greedy::{PriorityScheduler, RejectReason};
pub use stats::RunStats;
