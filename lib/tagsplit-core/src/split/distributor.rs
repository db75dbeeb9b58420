//! Materialization of schema components into partitions.

use indexmap::IndexMap;

use crate::openapi::{Components, Ref, RefOr, Schema};

use super::partition::Partition;
use super::resolver::TagAssignment;

/// Copies every schema component into the partitions whose closure recorded
/// it.
///
/// Components never reached by any tag are dropped from every output; that
/// pruning is intentional. Non-schema reference kinds in the assignment
/// never match a schema name here, so they are never materialized.
pub fn distribute_components(
    schemas: &IndexMap<String, RefOr<Schema>>,
    assignment: &TagAssignment,
    partitions: &mut IndexMap<String, Partition>,
) {
    for (name, schema) in schemas {
        let location = Ref::schema(name).ref_location;
        let Some(tags) = assignment.tags_for(&location) else {
            continue;
        };
        for tag in tags {
            let Some(partition) = partitions.get_mut(tag) else {
                continue;
            };
            partition
                .document
                .components
                .get_or_insert_with(Components::default)
                .schemas
                .insert(name.clone(), schema.clone());
        }
    }
}
