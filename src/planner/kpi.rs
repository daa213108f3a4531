//! Plan quality metrics.
//!
//! Summarizes a completed term plan: placement rate, merged-session
//! count, spread across days and windows, and venue cell utilization.
//! These are the numbers the surrounding portal shows after a planning
//! run; they play no role in the search itself.

use std::collections::HashMap;

use crate::models::{window_index_of, TermPlan, Venue, Weekday, CELLS_PER_WEEK, DAILY_WINDOWS};

/// Summary metrics for a term plan.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Fraction of requests that found a placement (0.0..1.0).
    pub placement_rate: f64,
    /// Assignments hosting more than one request.
    pub merged_session_count: usize,
    /// Assignments per weekday.
    pub assignments_by_day: HashMap<Weekday, usize>,
    /// Assignments per daily window, indexed like
    /// [`DAILY_WINDOWS`](crate::models::DAILY_WINDOWS).
    pub assignments_by_window: [usize; DAILY_WINDOWS.len()],
    /// Per-venue fraction of the weekly cell grid in use (0.0..1.0).
    pub utilization_by_venue: HashMap<i64, f64>,
    /// Mean venue utilization (0.0..1.0).
    pub avg_utilization: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the venue inventory it was built
    /// against.
    pub fn calculate(plan: &TermPlan, venues: &[Venue]) -> Self {
        let total_requests = plan.placed_count() + plan.unplaceable.len();
        let placement_rate = if total_requests == 0 {
            1.0
        } else {
            plan.placed_count() as f64 / total_requests as f64
        };

        let merged_session_count = plan.assignments.iter().filter(|a| a.is_merged()).count();

        let mut assignments_by_day: HashMap<Weekday, usize> = HashMap::new();
        let mut assignments_by_window = [0usize; DAILY_WINDOWS.len()];
        for a in &plan.assignments {
            *assignments_by_day.entry(a.day).or_insert(0) += 1;
            if let Some(idx) = window_index_of(a.start) {
                assignments_by_window[idx] += 1;
            }
        }

        let mut utilization_by_venue: HashMap<i64, f64> = HashMap::new();
        for v in venues {
            let used = plan.assignments_for_venue(v.id).len();
            utilization_by_venue.insert(v.id, used as f64 / CELLS_PER_WEEK as f64);
        }
        let avg_utilization = if utilization_by_venue.is_empty() {
            0.0
        } else {
            utilization_by_venue.values().sum::<f64>() / utilization_by_venue.len() as f64
        };

        Self {
            placement_rate,
            merged_session_count,
            assignments_by_day,
            assignments_by_window,
            utilization_by_venue,
            avg_utilization,
        }
    }
}
