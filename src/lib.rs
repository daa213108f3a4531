//! Term timetable planning for academic operations.
//!
//! Given a term's teaching-load requests and the institution's venue
//! inventory, the planner produces a clash-free weekly placement
//! (day, time window, venue) for every request, honoring capacity,
//! venue-type, and availability constraints. Requests representing the
//! same co-taught session (same lecturer and module, compatible
//! constraints) merge into one placement; the choice among feasible
//! slots is randomized so plans spread across the week instead of
//! clustering in the earliest cells.
//!
//! The planner is a pure in-process library call: it consumes two
//! fully materialized collections and returns a plan. Persistence,
//! authorization, and request intake belong to the surrounding portal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `AllocationRequest`, `Venue`,
//!   `SlotAssignment`, `TermPlan`, and the fixed weekly slot grid
//! - **`planner`**: Merge detection, constraint checking, randomized
//!   candidate search, and plan metrics
//! - **`validation`**: Input integrity checks run before search
//!
//! # Example
//!
//! ```
//! use term_planner::models::{AllocationRequest, ModuleIdentity, Venue};
//! use term_planner::planner::build_term_plan;
//!
//! let allocations = vec![
//!     AllocationRequest::new(1, 7, 100, ModuleIdentity::new(5, "Databases"))
//!         .with_students(60),
//!     AllocationRequest::new(2, 7, 101, ModuleIdentity::new(6, "Operating Systems"))
//!         .with_students(45),
//! ];
//! let venues = vec![Venue::new(1, 120, 1).with_name("Main Hall")];
//!
//! let plan = build_term_plan(7, &allocations, &venues).unwrap();
//! assert!(plan.is_fully_placed());
//! assert_eq!(plan.placed_count(), 2);
//! ```

pub mod models;
pub mod planner;
pub mod validation;
