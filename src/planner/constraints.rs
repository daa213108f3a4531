//! Constraint and fit evaluation.
//!
//! Decides whether a schedulable unit (a single request or a merged
//! class) can legally occupy a (day, window, venue) triple given the
//! placements committed so far. Infeasibility is an ordinary `false`
//! during search, never an error.
//!
//! Occupancy is tracked per invocation in [`OccupancyContext`]: a venue
//! cell set and a lecturer cell set keyed on (day, window index, id),
//! so every feasibility probe is an O(1) lookup against the fixed
//! 20-cell weekly grid.

use std::collections::HashSet;

use crate::models::{AllocationRequest, Venue, Weekday, DAILY_WINDOWS};

/// Per-invocation occupancy bookkeeping.
///
/// Constructed fresh at the start of each planner call and discarded on
/// return; concurrent invocations never share state.
#[derive(Debug, Default)]
pub(crate) struct OccupancyContext {
    /// Occupied venue cells: (day, window index, venue id).
    venue_busy: HashSet<(Weekday, usize, i64)>,
    /// Busy lecturer cells: (day, window index, lecturer id).
    lecturer_busy: HashSet<(Weekday, usize, i64)>,
}

impl OccupancyContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a venue cell is free.
    pub fn venue_free(&self, day: Weekday, window_idx: usize, venue_id: i64) -> bool {
        !self.venue_busy.contains(&(day, window_idx, venue_id))
    }

    /// Whether a lecturer is free in a cell.
    pub fn lecturer_free(&self, day: Weekday, window_idx: usize, lecturer_id: i64) -> bool {
        !self.lecturer_busy.contains(&(day, window_idx, lecturer_id))
    }

    /// Marks a venue cell and the hosting lecturer as occupied.
    pub fn commit(&mut self, day: Weekday, window_idx: usize, venue_id: i64, lecturer_id: i64) {
        self.venue_busy.insert((day, window_idx, venue_id));
        self.lecturer_busy.insert((day, window_idx, lecturer_id));
    }
}

/// Whether `members` (one schedulable unit) can occupy the given
/// (day, window, venue) triple.
///
/// Checks, all of which must pass:
/// 1. `day` is allowed by every member
/// 2. The window lies inside every member's daily bounds and is long
///    enough for its duration
/// 3. Every member admits the venue (type match, no type requirement,
///    or explicit allow-list entry)
/// 4. Combined headcount fits the venue capacity, unless every member
///    carries overflow permission for this venue
/// 5. No member's lecturer is already busy in the cell
/// 6. The venue cell is free
pub(crate) fn fits(
    members: &[&AllocationRequest],
    day: Weekday,
    window_idx: usize,
    venue: &Venue,
    ctx: &OccupancyContext,
) -> bool {
    let window = DAILY_WINDOWS[window_idx];

    if !ctx.venue_free(day, window_idx, venue.id) {
        return false;
    }

    let mut total_students: u32 = 0;
    for m in members {
        if !m.day_allowed(day) {
            return false;
        }
        if !window.within(m.earliest_start, m.latest_end) {
            return false;
        }
        if u32::from(window.duration_minutes()) < m.duration_minutes {
            return false;
        }
        if !m.admits_venue(venue) {
            return false;
        }
        if !ctx.lecturer_free(day, window_idx, m.lecturer_id) {
            return false;
        }
        total_students += m.number_of_students;
    }

    if total_students > venue.capacity && !members.iter().all(|m| m.overflow_allowed_at(venue.id)) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleIdentity, TimeOfDay, VenuePreference};

    fn request(id: i64, lecturer_id: i64) -> AllocationRequest {
        AllocationRequest::new(id, 1, lecturer_id, ModuleIdentity::new(5, "Databases"))
            .with_students(40)
    }

    fn hall() -> Venue {
        Venue::new(1, 100, 1).with_name("Hall A")
    }

    #[test]
    fn test_fits_unrestricted() {
        let r = request(1, 100);
        let ctx = OccupancyContext::new();
        for day in Weekday::ALL {
            for window_idx in 0..DAILY_WINDOWS.len() {
                assert!(fits(&[&r], day, window_idx, &hall(), &ctx));
            }
        }
    }

    #[test]
    fn test_day_not_allowed() {
        let r = request(1, 100).with_days(vec![Weekday::Tuesday]);
        let ctx = OccupancyContext::new();
        assert!(fits(&[&r], Weekday::Tuesday, 0, &hall(), &ctx));
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_window_outside_daily_bounds() {
        // Morning-only request fits windows 0-1, not 2-3
        let r =
            request(1, 100).with_window(TimeOfDay::from_hm(8, 30), TimeOfDay::from_hm(12, 30));
        let ctx = OccupancyContext::new();
        assert!(fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
        assert!(fits(&[&r], Weekday::Monday, 1, &hall(), &ctx));
        assert!(!fits(&[&r], Weekday::Monday, 2, &hall(), &ctx));
        assert!(!fits(&[&r], Weekday::Monday, 3, &hall(), &ctx));
    }

    #[test]
    fn test_duration_exceeds_window() {
        let r = request(1, 100).with_duration(180);
        let ctx = OccupancyContext::new();
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_venue_type_mismatch() {
        let r = request(1, 100).with_venue_type(2);
        let ctx = OccupancyContext::new();
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
        assert!(fits(&[&r], Weekday::Monday, 0, &Venue::new(2, 100, 2), &ctx));
    }

    #[test]
    fn test_allow_list_overrides_type() {
        let r = request(1, 100)
            .with_venue_type(2)
            .with_allowed_venue(VenuePreference::new(1));
        let ctx = OccupancyContext::new();
        // Hall A has type 1, but is explicitly allowed
        assert!(fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_capacity_exceeded() {
        let r = request(1, 100).with_students(150);
        let ctx = OccupancyContext::new();
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_overflow_permits_excess() {
        let r = request(1, 100)
            .with_students(150)
            .with_allowed_venue(VenuePreference::new(1).with_overflow());
        let ctx = OccupancyContext::new();
        assert!(fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_overflow_must_be_unanimous() {
        let a = request(1, 100)
            .with_students(60)
            .with_allowed_venue(VenuePreference::new(1).with_overflow());
        let b = request(2, 100).with_students(60);
        let ctx = OccupancyContext::new();
        // 120 > 100 and only one member may overflow
        assert!(!fits(&[&a, &b], Weekday::Monday, 0, &hall(), &ctx));

        let b = b.with_allowed_venue(VenuePreference::new(1).with_overflow());
        assert!(fits(&[&a, &b], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_merged_headcount_within_capacity() {
        let a = request(1, 100).with_students(40);
        let b = request(2, 100).with_students(50);
        let ctx = OccupancyContext::new();
        assert!(fits(&[&a, &b], Weekday::Monday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_occupied_venue_cell() {
        let r = request(1, 100);
        let mut ctx = OccupancyContext::new();
        ctx.commit(Weekday::Monday, 0, 1, 999);
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
        // Other cells unaffected
        assert!(fits(&[&r], Weekday::Monday, 1, &hall(), &ctx));
        assert!(fits(&[&r], Weekday::Tuesday, 0, &hall(), &ctx));
    }

    #[test]
    fn test_busy_lecturer() {
        let r = request(1, 100);
        let mut ctx = OccupancyContext::new();
        // Lecturer 100 teaches elsewhere in the same cell
        ctx.commit(Weekday::Monday, 0, 2, 100);
        assert!(!fits(&[&r], Weekday::Monday, 0, &hall(), &ctx));
        assert!(fits(&[&r], Weekday::Monday, 1, &hall(), &ctx));
    }

    #[test]
    fn test_merged_day_intersection() {
        let a = request(1, 100).with_days(vec![Weekday::Monday, Weekday::Tuesday]);
        let b = request(2, 100).with_days(vec![Weekday::Tuesday, Weekday::Wednesday]);
        let ctx = OccupancyContext::new();
        assert!(!fits(&[&a, &b], Weekday::Monday, 0, &hall(), &ctx));
        assert!(fits(&[&a, &b], Weekday::Tuesday, 0, &hall(), &ctx));
        assert!(!fits(&[&a, &b], Weekday::Wednesday, 0, &hall(), &ctx));
    }
}
