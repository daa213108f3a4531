//! Input validation for term planning.
//!
//! Checks structural integrity of allocation requests and venues before
//! search begins. Detects:
//! - Empty allowed-day sets
//! - Inverted or empty daily time windows
//! - Zero durations and zero venue capacities
//! - Duplicate IDs
//! - Requests tagged with a different term
//! - Allow-list entries referencing venues absent from the inventory
//!
//! A malformed input is a caller programming error, not a scheduling
//! condition: the planner rejects it wholesale instead of producing a
//! partial plan.

use crate::models::{AllocationRequest, Venue};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A request has no allowed weekdays.
    EmptyAllowedDays,
    /// A request's daily window is inverted or zero-length.
    EmptyTimeWindow,
    /// A request has a zero duration.
    ZeroDuration,
    /// A venue has zero capacity.
    ZeroCapacity,
    /// Two entities share the same ID.
    DuplicateId,
    /// A request belongs to a different term.
    TermMismatch,
    /// An allow-list entry references a venue that doesn't exist.
    UnknownVenueReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates planner input for a term.
///
/// Checks:
/// 1. No duplicate allocation IDs
/// 2. No duplicate venue IDs
/// 3. Every request belongs to `term_id`
/// 4. Every request has at least one allowed day
/// 5. Every request's daily window is non-empty
/// 6. Every request has a positive duration
/// 7. Every venue has a positive capacity
/// 8. Every allow-list entry references a supplied venue
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    term_id: i64,
    allocations: &[AllocationRequest],
    venues: &[Venue],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect venue IDs
    let mut venue_ids = HashSet::new();
    for v in venues {
        if !venue_ids.insert(v.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate venue ID: {}", v.id),
            ));
        }
        if v.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Venue {} has zero capacity", v.id),
            ));
        }
    }

    let mut allocation_ids = HashSet::new();
    for a in allocations {
        if !allocation_ids.insert(a.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate allocation ID: {}", a.id),
            ));
        }

        if a.term_id != term_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::TermMismatch,
                format!(
                    "Allocation {} belongs to term {}, planning term {}",
                    a.id, a.term_id, term_id
                ),
            ));
        }

        if a.allowed_days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAllowedDays,
                format!("Allocation {} has no allowed days", a.id),
            ));
        }

        if a.earliest_start >= a.latest_end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeWindow,
                format!(
                    "Allocation {} has an empty time window ({} >= {})",
                    a.id, a.earliest_start, a.latest_end
                ),
            ));
        }

        if a.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Allocation {} has zero duration", a.id),
            ));
        }

        for pref in &a.allowed_venues {
            if !venue_ids.contains(&pref.venue_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownVenueReference,
                    format!(
                        "Allocation {} references unknown venue {}",
                        a.id, pref.venue_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleIdentity, TimeOfDay, VenuePreference, Weekday};

    fn sample_venues() -> Vec<Venue> {
        vec![
            Venue::new(1, 100, 1).with_name("Hall A"),
            Venue::new(2, 40, 2).with_name("Lab 1"),
        ]
    }

    fn sample_request(id: i64) -> AllocationRequest {
        AllocationRequest::new(id, 10, 100 + id, ModuleIdentity::new(id, format!("Module {id}")))
            .with_students(30)
    }

    #[test]
    fn test_valid_input() {
        let allocations = vec![sample_request(1), sample_request(2)];
        assert!(validate_input(10, &allocations, &sample_venues()).is_ok());
    }

    #[test]
    fn test_duplicate_allocation_id() {
        let allocations = vec![sample_request(1), sample_request(1)];
        let errors = validate_input(10, &allocations, &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_venue_id() {
        let venues = vec![Venue::new(1, 100, 1), Venue::new(1, 50, 2)];
        let errors = validate_input(10, &[sample_request(1)], &venues).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("venue")));
    }

    #[test]
    fn test_term_mismatch() {
        let errors = validate_input(11, &[sample_request(1)], &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TermMismatch));
    }

    #[test]
    fn test_empty_allowed_days() {
        let a = sample_request(1).with_days(vec![]);
        let errors = validate_input(10, &[a], &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyAllowedDays));
    }

    #[test]
    fn test_empty_time_window() {
        let a = sample_request(1).with_window(TimeOfDay::from_hm(12, 0), TimeOfDay::from_hm(9, 0));
        let errors = validate_input(10, &[a], &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTimeWindow));
    }

    #[test]
    fn test_zero_duration() {
        let a = sample_request(1).with_duration(0);
        let errors = validate_input(10, &[a], &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_zero_capacity() {
        let venues = vec![Venue::new(1, 0, 1)];
        let errors = validate_input(10, &[sample_request(1)], &venues).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
    }

    #[test]
    fn test_unknown_venue_reference() {
        let a = sample_request(1).with_allowed_venue(VenuePreference::new(99));
        let errors = validate_input(10, &[a], &sample_venues()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownVenueReference));
    }

    #[test]
    fn test_multiple_errors() {
        let a = sample_request(1)
            .with_days(vec![])
            .with_duration(0);
        let b = sample_request(1); // duplicate of a's id
        let errors = validate_input(10, &[a, b], &sample_venues()).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_one_day_is_enough() {
        let a = sample_request(1).with_days(vec![Weekday::Tuesday]);
        assert!(validate_input(10, &[a], &sample_venues()).is_ok());
    }
}
