//! Venue model.
//!
//! A venue is a physical teaching space: lecture hall, laboratory,
//! seminar room. Each venue has a nominal seating capacity, a type
//! identifier matched against request requirements, and an optional set
//! of school affiliations used for soft placement affinity.

use serde::{Deserialize, Serialize};

/// A physical teaching venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: i64,
    /// Human-readable name (e.g., "Block C Lab 2").
    pub name: String,
    /// Nominal seating capacity.
    pub capacity: u32,
    /// Venue type identifier (lecture hall, lab, ...), matched against
    /// `AllocationRequest::required_venue_types`.
    pub type_id: i64,
    /// Schools that use this venue preferentially. Empty = open to all.
    pub school_ids: Vec<i64>,
}

impl Venue {
    /// Creates a new venue.
    pub fn new(id: i64, capacity: u32, type_id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            capacity,
            type_id,
            school_ids: Vec::new(),
        }
    }

    /// Sets the venue name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a school affiliation.
    pub fn with_school(mut self, school_id: i64) -> Self {
        self.school_ids.push(school_id);
        self
    }

    /// Whether this venue shares a school with any of the given schools.
    ///
    /// Returns `false` when either side has no school data; affinity is
    /// a positive signal, never a default.
    pub fn shares_school(&self, school_ids: &[i64]) -> bool {
        self.school_ids.iter().any(|s| school_ids.contains(s))
    }
}
