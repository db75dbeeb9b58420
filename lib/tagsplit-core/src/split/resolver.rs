//! Reference-closure resolution over the schema dependency graph.
//!
//! The resolver turns an initial assignment of references to tags (seeded by
//! the partitioner from operation-level references) into its fixpoint: every
//! schema component reachable from a tag's seed set ends up carrying that
//! tag. The walk is a worklist of `(component, newly gained tag)` events
//! rather than recursion, so deep or densely cyclic schema graphs cannot
//! overflow the stack and draining the queue is the termination condition.

use std::collections::{BTreeSet, VecDeque};

use indexmap::IndexMap;
use tracing::debug;

use crate::openapi::{RefOr, Schema, schema_component_name};

/// The mapping from reference location to the set of tags needing it.
///
/// Grow-only: once a `(reference, tag)` pair is recorded it is never
/// removed. [`TagAssignment::record`] reports whether the pair is new, which
/// is what bounds the fixpoint iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagAssignment {
    entries: IndexMap<String, BTreeSet<String>>,
}

impl TagAssignment {
    /// Records that `tag` needs the component at `reference`.
    ///
    /// Returns `true` when the pair was not present before. Empty reference
    /// locations are ignored.
    pub fn record(&mut self, reference: &str, tag: &str) -> bool {
        if reference.is_empty() {
            return false;
        }
        self.entries
            .entry(reference.to_owned())
            .or_default()
            .insert(tag.to_owned())
    }

    /// The tags recorded for a reference location, if any.
    pub fn tags_for(&self, reference: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(reference)
    }

    /// Iterates over all recorded references and their tag sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(reference, tags)| (reference.as_str(), tags))
    }

    /// Number of recorded references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Propagates tags along schema reference edges until the fixpoint.
///
/// `schemas` is the document's schema component map. References naming a
/// component absent from it are dead edges: nothing propagates through them
/// and they are returned as warnings instead of failing the run. References
/// of a non-schema kind are left in the assignment untouched but never
/// traversed.
pub fn resolve_closure(
    assignment: &mut TagAssignment,
    schemas: &IndexMap<String, RefOr<Schema>>,
) -> BTreeSet<String> {
    let mut dangling = BTreeSet::new();

    let mut worklist: VecDeque<(String, String)> = VecDeque::new();
    for (reference, tags) in assignment.iter() {
        let Some(name) = schema_component_name(reference) else {
            continue;
        };
        if schemas.contains_key(name) {
            for tag in tags {
                worklist.push_back((name.to_owned(), tag.clone()));
            }
        } else {
            dangling.insert(reference.to_owned());
        }
    }

    while let Some((name, tag)) = worklist.pop_front() {
        // Top-level components that are themselves references carry no
        // properties and contribute no edges.
        let Some(RefOr::T(schema)) = schemas.get(&name) else {
            continue;
        };
        for edge in schema.reference_edges() {
            if !assignment.record(edge, &tag) {
                continue;
            }
            match schema_component_name(edge) {
                Some(target) if schemas.contains_key(target) => {
                    worklist.push_back((target.to_owned(), tag.clone()));
                }
                Some(_) => {
                    debug!(reference = %edge, "schema reference has no matching component");
                    dangling.insert(edge.to_owned());
                }
                // Non-schema kinds are recorded but not traversed.
                None => {}
            }
        }
    }

    dangling
}
