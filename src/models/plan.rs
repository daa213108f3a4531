//! Term plan (solution) model.
//!
//! A term plan is the planner's output: one [`SlotAssignment`] per
//! placed session (merged requests share an assignment) plus the ids of
//! requests for which no feasible placement exists. The caller persists
//! the assignments and reports the unplaceable ids back to the user.

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};

/// A committed weekly placement: one venue cell holding one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Term the placement belongs to.
    pub term_id: i64,
    /// Day of week.
    pub day: Weekday,
    /// Window start.
    pub start: TimeOfDay,
    /// Window end.
    pub end: TimeOfDay,
    /// Hosting venue.
    pub venue_id: i64,
    /// Member allocation request ids. More than one only when the
    /// merge rule combined co-taught requests.
    pub allocation_ids: Vec<i64>,
}

impl SlotAssignment {
    /// Whether this assignment hosts a merged group.
    #[inline]
    pub fn is_merged(&self) -> bool {
        self.allocation_ids.len() > 1
    }

    /// Whether this assignment contains the given allocation.
    pub fn contains(&self, allocation_id: i64) -> bool {
        self.allocation_ids.contains(&allocation_id)
    }
}

/// A complete plan for one term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermPlan {
    /// Planned term.
    pub term_id: i64,
    /// Committed placements.
    pub assignments: Vec<SlotAssignment>,
    /// Allocation ids for which no feasible placement exists.
    pub unplaceable: Vec<i64>,
}

impl TermPlan {
    /// Creates an empty plan for a term.
    pub fn new(term_id: i64) -> Self {
        Self {
            term_id,
            assignments: Vec::new(),
            unplaceable: Vec::new(),
        }
    }

    /// Finds the assignment containing a given allocation.
    pub fn assignment_for(&self, allocation_id: i64) -> Option<&SlotAssignment> {
        self.assignments.iter().find(|a| a.contains(allocation_id))
    }

    /// Returns all assignments hosted by a venue.
    pub fn assignments_for_venue(&self, venue_id: i64) -> Vec<&SlotAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.venue_id == venue_id)
            .collect()
    }

    /// Returns all assignments on a given day.
    pub fn assignments_on(&self, day: Weekday) -> Vec<&SlotAssignment> {
        self.assignments.iter().filter(|a| a.day == day).collect()
    }

    /// Number of placed allocation requests (members, not assignments).
    pub fn placed_count(&self) -> usize {
        self.assignments.iter().map(|a| a.allocation_ids.len()).sum()
    }

    /// Whether every request found a placement.
    pub fn is_fully_placed(&self) -> bool {
        self.unplaceable.is_empty()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
