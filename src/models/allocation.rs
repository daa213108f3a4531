//! Allocation request model.
//!
//! An allocation request is one lecturer-module(-group) teaching-load
//! entry that needs a weekly placement for the term. It carries the
//! scheduling constraints the planner must honor: allowed days, a daily
//! time window, venue-type requirements, and an optional explicit venue
//! allow-list with per-venue overflow permission.
//!
//! Requests sharing a lecturer and module identity may represent the
//! same physical session split across bookkeeping records (e.g., a
//! module cross-listed into two program offerings); the planner merges
//! such compatible requests into one placement.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TimeOfDay, Venue, Weekday};

/// Module identity: the key used for merge detection.
///
/// Two requests refer to the same module iff both id and name match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleIdentity {
    /// Module identifier.
    pub id: i64,
    /// Module name (e.g., "Data Structures").
    pub name: String,
}

impl ModuleIdentity {
    /// Creates a new module identity.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Kind of teaching session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassType {
    /// Standard lecture.
    Lecture,
    /// Small-group tutorial.
    Tutorial,
    /// Lab or other hands-on session.
    Practical,
    /// Seminar.
    Seminar,
    /// Institution-specific type.
    Custom(String),
}

/// One entry of a request's explicit venue allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePreference {
    /// Allowed venue.
    pub venue_id: i64,
    /// Whether the session may exceed this venue's nominal capacity.
    pub allow_overflow: bool,
}

impl VenuePreference {
    /// Creates an allow-list entry without overflow permission.
    pub fn new(venue_id: i64) -> Self {
        Self {
            venue_id,
            allow_overflow: false,
        }
    }

    /// Permits exceeding the venue's capacity.
    pub fn with_overflow(mut self) -> Self {
        self.allow_overflow = true;
        self
    }
}

/// A teaching-load request awaiting weekly placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Unique request identifier.
    pub id: i64,
    /// Term this request belongs to.
    pub term_id: i64,
    /// Lecturer delivering the session.
    pub lecturer_id: i64,
    /// Module identity (merge-detection key).
    pub module: ModuleIdentity,
    /// Program/semester offering this request belongs to. Distinct
    /// offerings may share a module identity (cross-listing).
    pub semester_module_id: i64,
    /// Label distinguishing parallel sections of the same module and
    /// lecturer. `None` = the only section.
    pub group_name: Option<String>,
    /// Session length in minutes.
    pub duration_minutes: u32,
    /// Expected headcount.
    pub number_of_students: u32,
    /// Kind of session.
    pub class_type: ClassType,
    /// Weekdays on which this session may be scheduled.
    pub allowed_days: Vec<Weekday>,
    /// Earliest acceptable start of the daily window.
    pub earliest_start: TimeOfDay,
    /// Latest acceptable end of the daily window.
    pub latest_end: TimeOfDay,
    /// Acceptable venue type identifiers. Empty = any type.
    pub required_venue_types: Vec<i64>,
    /// Explicit venue allow-list. Empty = none; a listed venue
    /// qualifies even when its type is not in `required_venue_types`.
    pub allowed_venues: Vec<VenuePreference>,
    /// Schools the lecturer is affiliated with (venue affinity).
    pub lecturer_school_ids: Vec<i64>,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl AllocationRequest {
    /// Creates a request with an all-week, full-day window and no venue
    /// restrictions.
    pub fn new(id: i64, term_id: i64, lecturer_id: i64, module: ModuleIdentity) -> Self {
        Self {
            id,
            term_id,
            lecturer_id,
            module,
            semester_module_id: 0,
            group_name: None,
            duration_minutes: 120,
            number_of_students: 0,
            class_type: ClassType::Lecture,
            allowed_days: Weekday::ALL.to_vec(),
            earliest_start: TimeOfDay::from_hm(8, 30),
            latest_end: TimeOfDay::from_hm(16, 30),
            required_venue_types: Vec::new(),
            allowed_venues: Vec::new(),
            lecturer_school_ids: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the program/semester offering.
    pub fn with_semester_module(mut self, semester_module_id: i64) -> Self {
        self.semester_module_id = semester_module_id;
        self
    }

    /// Sets the parallel-section label.
    pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Sets the session length.
    pub fn with_duration(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the expected headcount.
    pub fn with_students(mut self, number_of_students: u32) -> Self {
        self.number_of_students = number_of_students;
        self
    }

    /// Sets the session kind.
    pub fn with_class_type(mut self, class_type: ClassType) -> Self {
        self.class_type = class_type;
        self
    }

    /// Restricts the allowed weekdays.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.allowed_days = days;
        self
    }

    /// Restricts the daily time window.
    pub fn with_window(mut self, earliest_start: TimeOfDay, latest_end: TimeOfDay) -> Self {
        self.earliest_start = earliest_start;
        self.latest_end = latest_end;
        self
    }

    /// Adds an acceptable venue type.
    pub fn with_venue_type(mut self, type_id: i64) -> Self {
        self.required_venue_types.push(type_id);
        self
    }

    /// Adds an explicit venue allow-list entry.
    pub fn with_allowed_venue(mut self, pref: VenuePreference) -> Self {
        self.allowed_venues.push(pref);
        self
    }

    /// Adds a lecturer school affiliation.
    pub fn with_lecturer_school(mut self, school_id: i64) -> Self {
        self.lecturer_school_ids.push(school_id);
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this request may be scheduled on `day`.
    pub fn day_allowed(&self, day: Weekday) -> bool {
        self.allowed_days.contains(&day)
    }

    /// Whether `venue` satisfies this request's venue requirements:
    /// no type requirement, a matching type, or an explicit allow-list
    /// entry for the venue.
    pub fn admits_venue(&self, venue: &Venue) -> bool {
        self.required_venue_types.is_empty()
            || self.required_venue_types.contains(&venue.type_id)
            || self.venue_preference(venue.id).is_some()
    }

    /// The allow-list entry for `venue_id`, if any.
    pub fn venue_preference(&self, venue_id: i64) -> Option<&VenuePreference> {
        self.allowed_venues.iter().find(|p| p.venue_id == venue_id)
    }

    /// Whether this request may exceed `venue_id`'s nominal capacity.
    pub fn overflow_allowed_at(&self, venue_id: i64) -> bool {
        self.venue_preference(venue_id)
            .map(|p| p.allow_overflow)
            .unwrap_or(false)
    }
}
