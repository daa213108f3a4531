//! Merge detection for co-taught sessions.
//!
//! Requests sharing a lecturer and module identity may be bookkeeping
//! splits of one physical session — typically a module cross-listed
//! into several program offerings, one request per offering. Grouping
//! runs as its own deterministic phase before any randomized search, so
//! compatible requests land in the same assignment on every invocation
//! no matter what the random source draws.
//!
//! # Compatibility
//!
//! Two requests merge iff they share lecturer, module identity, class
//! type, and section label, their allowed days and daily windows
//! overlap, and their venue-type requirements are compatible (either
//! empty, or intersecting). Compatibility is closed transitively:
//! connected requests form one class scheduled as a single unit.

use std::collections::HashMap;

use crate::models::AllocationRequest;

/// A group of requests scheduled as one unit.
///
/// Indices refer to the planner's input slice. Singleton for requests
/// with no merge partner.
#[derive(Debug, Clone)]
pub(crate) struct MergeClass {
    /// Member indices, ascending.
    pub members: Vec<usize>,
}

/// Groups requests into merge classes.
///
/// Deterministic: output order and class membership depend only on the
/// input, never on the planner's random source.
pub(crate) fn merge_classes(allocations: &[AllocationRequest]) -> Vec<MergeClass> {
    // Only requests sharing the merge key can ever combine.
    let mut buckets: HashMap<(i64, i64, &str), Vec<usize>> = HashMap::new();
    for (idx, a) in allocations.iter().enumerate() {
        buckets
            .entry((a.lecturer_id, a.module.id, a.module.name.as_str()))
            .or_default()
            .push(idx);
    }

    let mut classes = Vec::new();
    for bucket in buckets.into_values() {
        classes.extend(split_bucket(&bucket, allocations));
    }

    // Stable order independent of hash-map iteration
    classes.sort_by_key(|c| c.members[0]);
    classes
}

/// Splits one same-key bucket into classes of mutually reachable
/// compatible requests (union-find over pairwise compatibility).
fn split_bucket(bucket: &[usize], allocations: &[AllocationRequest]) -> Vec<MergeClass> {
    let mut parent: Vec<usize> = (0..bucket.len()).collect();

    fn find(parent: &mut [usize], i: usize) -> usize {
        let mut root = i;
        while parent[root] != root {
            root = parent[root];
        }
        // Path compression
        let mut cur = i;
        while parent[cur] != root {
            let next = parent[cur];
            parent[cur] = root;
            cur = next;
        }
        root
    }

    for i in 0..bucket.len() {
        for j in (i + 1)..bucket.len() {
            if mergeable(&allocations[bucket[i]], &allocations[bucket[j]]) {
                let ri = find(&mut parent, i);
                let rj = find(&mut parent, j);
                if ri != rj {
                    parent[rj] = ri;
                }
            }
        }
    }

    let mut by_root: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..bucket.len() {
        let root = find(&mut parent, i);
        by_root.entry(root).or_default().push(bucket[i]);
    }

    let mut classes: Vec<MergeClass> = by_root
        .into_values()
        .map(|mut members| {
            members.sort_unstable();
            MergeClass { members }
        })
        .collect();
    classes.sort_by_key(|c| c.members[0]);
    classes
}

/// Whether two same-key requests are compatible for co-teaching.
fn mergeable(a: &AllocationRequest, b: &AllocationRequest) -> bool {
    a.lecturer_id == b.lecturer_id
        && a.module == b.module
        && a.class_type == b.class_type
        && a.group_name == b.group_name
        && days_overlap(a, b)
        && windows_overlap(a, b)
        && venue_types_compatible(a, b)
}

fn days_overlap(a: &AllocationRequest, b: &AllocationRequest) -> bool {
    a.allowed_days.iter().any(|d| b.allowed_days.contains(d))
}

fn windows_overlap(a: &AllocationRequest, b: &AllocationRequest) -> bool {
    a.earliest_start.max(b.earliest_start) < a.latest_end.min(b.latest_end)
}

/// Empty venue-type sets are wildcards; two non-empty sets must share
/// at least one type.
fn venue_types_compatible(a: &AllocationRequest, b: &AllocationRequest) -> bool {
    a.required_venue_types.is_empty()
        || b.required_venue_types.is_empty()
        || a.required_venue_types
            .iter()
            .any(|t| b.required_venue_types.contains(t))
}
