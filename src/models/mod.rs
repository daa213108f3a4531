//! Timetabling domain models.
//!
//! Core data types for term timetable planning: teaching-load requests,
//! venues, the fixed weekly slot grid, and the resulting plan.
//!
//! All structures are plain values constructed fresh per planner
//! invocation; persistence of venues, requests, and assignments belongs
//! to the surrounding portal, not to this crate.

mod allocation;
mod plan;
mod timeslot;
mod venue;

pub use allocation::{AllocationRequest, ClassType, ModuleIdentity, VenuePreference};
pub use plan::{SlotAssignment, TermPlan};
pub use timeslot::{
    window_index_of, SlotWindow, TimeOfDay, Weekday, CELLS_PER_WEEK, DAILY_WINDOWS,
};
pub use venue::Venue;
