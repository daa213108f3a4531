//! Candidate search and randomized placement.
//!
//! # Algorithm
//!
//! 1. Validate input; reject malformed requests before any search.
//! 2. Group requests into merge classes (deterministic phase).
//! 3. Shuffle the unit order, so no unit systematically gets first
//!    pick of prime slots.
//! 4. For each unit, enumerate every (day, window, venue) triple that
//!    passes the fit checks against the running occupancy, and commit
//!    one chosen uniformly at random. A unit with no feasible triple
//!    is recorded unplaceable and planning continues.
//! 5. Assemble committed placements into the final assignment list.
//!
//! Random choice among feasible triples spreads placements across the
//! week instead of piling everything into the earliest cell. Venues
//! affiliated with the lecturer's school are preferred when any such
//! candidate is feasible; the draw stays uniform within the preferred
//! pool.
//!
//! # Complexity
//! O(u * v * 20) feasibility probes where u=units, v=venues; each probe
//! is O(members) with O(1) occupancy lookups.

use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::constraints::{fits, OccupancyContext};
use super::merge::{merge_classes, MergeClass};
use super::PlanError;
use crate::models::{
    AllocationRequest, SlotAssignment, TermPlan, Venue, Weekday, DAILY_WINDOWS,
};
use crate::validation;

/// A chosen (day, window, venue) triple for one unit.
#[derive(Debug, Clone, Copy)]
struct Placement {
    day: Weekday,
    window_idx: usize,
    venue_id: i64,
}

/// Term timetable planner.
///
/// Pure over its inputs: all occupancy bookkeeping lives in a per-call
/// context, so concurrent plans for different terms are independent.
/// By default every invocation draws fresh entropy and comparable runs
/// may legitimately differ; [`with_seed`](TermPlanner::with_seed) fixes
/// the random stream for reproducible replay.
///
/// # Example
///
/// ```
/// use term_planner::models::{AllocationRequest, ModuleIdentity, Venue};
/// use term_planner::planner::TermPlanner;
///
/// let allocations = vec![
///     AllocationRequest::new(1, 7, 100, ModuleIdentity::new(5, "Databases"))
///         .with_students(60),
/// ];
/// let venues = vec![Venue::new(1, 120, 1).with_name("Main Hall")];
///
/// let plan = TermPlanner::new().plan(7, &allocations, &venues).unwrap();
/// assert!(plan.is_fully_placed());
/// assert_eq!(plan.placed_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermPlanner {
    seed: Option<u64>,
}

impl TermPlanner {
    /// Creates a planner drawing fresh entropy per invocation.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fixes the random seed, making plans reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plans a term timetable.
    ///
    /// Returns an error only when the input fails validation;
    /// unplaceable requests are reported inside the returned plan.
    pub fn plan(
        &self,
        term_id: i64,
        allocations: &[AllocationRequest],
        venues: &[Venue],
    ) -> Result<TermPlan, PlanError> {
        match self.seed {
            Some(seed) => self.plan_with_rng(
                term_id,
                allocations,
                venues,
                &mut SmallRng::seed_from_u64(seed),
            ),
            None => self.plan_with_rng(term_id, allocations, venues, &mut rand::rng()),
        }
    }

    /// Plans with a caller-supplied random source.
    pub fn plan_with_rng<R: Rng>(
        &self,
        term_id: i64,
        allocations: &[AllocationRequest],
        venues: &[Venue],
        rng: &mut R,
    ) -> Result<TermPlan, PlanError> {
        validation::validate_input(term_id, allocations, venues)
            .map_err(PlanError::InvalidInput)?;

        info!(
            term_id,
            requests = allocations.len(),
            venues = venues.len(),
            "planning term timetable"
        );

        // Phase 1: deterministic merge classes
        let classes = merge_classes(allocations);

        // Phase 2: randomized search over shuffled units
        let mut order: Vec<usize> = (0..classes.len()).collect();
        order.shuffle(rng);

        let mut ctx = OccupancyContext::new();
        let mut placements: Vec<(usize, Placement)> = Vec::new();
        let mut unplaceable: Vec<i64> = Vec::new();

        for &class_idx in &order {
            let class = &classes[class_idx];
            let members: Vec<&AllocationRequest> =
                class.members.iter().map(|&i| &allocations[i]).collect();

            match place_unit(&members, venues, &ctx, rng) {
                Some(placement) => {
                    ctx.commit(
                        placement.day,
                        placement.window_idx,
                        placement.venue_id,
                        members[0].lecturer_id,
                    );
                    debug!(
                        allocations = ?member_ids(&members),
                        day = %placement.day,
                        window = %DAILY_WINDOWS[placement.window_idx],
                        venue = placement.venue_id,
                        "placed unit"
                    );
                    placements.push((class_idx, placement));
                }
                None => {
                    let ids = member_ids(&members);
                    warn!(allocations = ?ids, "no feasible slot for unit");
                    unplaceable.extend(ids);
                }
            }
        }

        let plan = assemble(term_id, allocations, &classes, &placements, unplaceable);
        info!(
            term_id,
            placed = plan.placed_count(),
            unplaceable = plan.unplaceable.len(),
            "term plan complete"
        );
        Ok(plan)
    }
}

/// Plans a term timetable with default settings.
///
/// Convenience wrapper over [`TermPlanner::plan`].
pub fn build_term_plan(
    term_id: i64,
    allocations: &[AllocationRequest],
    venues: &[Venue],
) -> Result<TermPlan, PlanError> {
    TermPlanner::new().plan(term_id, allocations, venues)
}

fn member_ids(members: &[&AllocationRequest]) -> Vec<i64> {
    members.iter().map(|m| m.id).collect()
}

/// Picks a feasible (day, window, venue) triple for one unit, uniformly
/// at random. School-affiliated venues take precedence when feasible.
fn place_unit<R: Rng>(
    members: &[&AllocationRequest],
    venues: &[Venue],
    ctx: &OccupancyContext,
    rng: &mut R,
) -> Option<Placement> {
    let mut candidates: Vec<(Weekday, usize, &Venue)> = Vec::new();
    for venue in venues {
        for day in Weekday::ALL {
            for window_idx in 0..DAILY_WINDOWS.len() {
                if fits(members, day, window_idx, venue, ctx) {
                    candidates.push((day, window_idx, venue));
                }
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let schools: Vec<i64> = members
        .iter()
        .flat_map(|m| m.lecturer_school_ids.iter().copied())
        .collect();
    let affine: Vec<(Weekday, usize, &Venue)> = if schools.is_empty() {
        Vec::new()
    } else {
        candidates
            .iter()
            .copied()
            .filter(|(_, _, v)| v.shares_school(&schools))
            .collect()
    };

    let pool = if affine.is_empty() { &candidates } else { &affine };
    let &(day, window_idx, venue) = pool.choose(rng)?;
    Some(Placement {
        day,
        window_idx,
        venue_id: venue.id,
    })
}

/// Converts committed placements into the final assignment list, one
/// [`SlotAssignment`] per placed unit, in (day, start, venue) order.
fn assemble(
    term_id: i64,
    allocations: &[AllocationRequest],
    classes: &[MergeClass],
    placements: &[(usize, Placement)],
    mut unplaceable: Vec<i64>,
) -> TermPlan {
    let mut plan = TermPlan::new(term_id);

    for &(class_idx, placement) in placements {
        let window = DAILY_WINDOWS[placement.window_idx];
        let mut ids: Vec<i64> = classes[class_idx]
            .members
            .iter()
            .map(|&i| allocations[i].id)
            .collect();
        ids.sort_unstable();

        plan.assignments.push(SlotAssignment {
            term_id,
            day: placement.day,
            start: window.start,
            end: window.end,
            venue_id: placement.venue_id,
            allocation_ids: ids,
        });
    }

    plan.assignments
        .sort_by_key(|a| (a.day, a.start, a.venue_id));
    unplaceable.sort_unstable();
    plan.unplaceable = unplaceable;
    plan
}
