//! Term timetable planning engine.
//!
//! # Algorithm
//!
//! Planning runs in two clearly separated phases:
//!
//! 1. **Merge detection** (deterministic): requests sharing a lecturer
//!    and module identity with compatible constraints are grouped into
//!    classes scheduled as single units, so co-taught sessions share a
//!    placement on every invocation regardless of the random source.
//! 2. **Randomized search**: units are processed in shuffled order;
//!    each commits a uniformly random feasible (day, window, venue)
//!    triple given the placements made so far.
//!
//! The planner satisfies constraints; it does not optimize a global
//! objective. A unit with no feasible triple is reported unplaceable
//! inside the returned plan and the rest of the term still plans.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod constraints;
mod kpi;
mod merge;
mod search;

pub use kpi::PlanKpi;
pub use search::{build_term_plan, TermPlanner};

use thiserror::Error;

use crate::validation::ValidationError;

/// Planner failure.
///
/// Unplaceable allocations are not errors — they are reported inside
/// [`TermPlan`](crate::models::TermPlan). An error means the input was
/// rejected before any search ran.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Input failed boundary validation.
    #[error("invalid planner input: {}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    InvalidInput(Vec<ValidationError>),
}
