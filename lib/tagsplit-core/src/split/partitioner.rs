//! Assignment of operations to partitions and seeding of the reference
//! graph.

use indexmap::IndexMap;

use crate::openapi::{MediaType, OpenApi, Operation, PathItem, RefOr};

use super::partition::Partition;
use super::registry::{DEFAULT_TAG, TagRegistry};
use super::resolver::TagAssignment;

/// Walks every path and verb slot of the source document once, attaching
/// each operation to the partitions named by its tags (or to the default
/// partition) and recording the operation's direct references into the tag
/// assignment.
///
/// Every registry entry gets a partition, even when no operation lands in
/// it; the default partition in particular is always produced. Absent
/// optional fields are simply skipped, so this pass cannot fail.
pub fn partition_document(
    source: &OpenApi,
    registry: &TagRegistry,
    assignment: &mut TagAssignment,
) -> IndexMap<String, Partition> {
    let mut partitions: IndexMap<String, Partition> = registry
        .iter()
        .map(|(name, tag)| (name.to_owned(), Partition::for_tag(source, tag)))
        .collect();

    for (path, path_item) in &source.paths {
        for (method, operation) in path_item.operations() {
            for tag in target_tags(operation) {
                // Tags without a declared partition are skipped; only
                // registered tags produce output.
                let Some(partition) = partitions.get_mut(tag) else {
                    continue;
                };
                let item = partition
                    .document
                    .paths
                    .entry(path.clone())
                    .or_insert_with(|| path_item.without_operations());
                *item.operation_mut(method) = Some(operation.clone());

                record_operation_refs(path_item, operation, tag, assignment);
            }
        }
    }

    partitions
}

/// The partitions an operation belongs to: its declared tags, or the default
/// tag when the list is empty or absent.
fn target_tags(operation: &Operation) -> impl Iterator<Item = &str> {
    let declared = operation.tags.as_deref().unwrap_or_default();
    let use_default = declared.is_empty();
    declared
        .iter()
        .map(String::as_str)
        .chain(use_default.then_some(DEFAULT_TAG))
}

/// Records the direct references of one operation (and of its path item's
/// shared fields) under the owning partition's tag.
fn record_operation_refs(
    path_item: &PathItem,
    operation: &Operation,
    tag: &str,
    assignment: &mut TagAssignment,
) {
    for parameter in path_item.parameters.iter().flatten() {
        if let Some(location) = parameter.ref_location() {
            assignment.record(location, tag);
        }
    }
    if let Some(location) = &path_item.ref_location {
        assignment.record(location, tag);
    }

    for parameter in operation.parameters.iter().flatten() {
        if let Some(location) = parameter.ref_location() {
            assignment.record(location, tag);
        }
    }

    match &operation.request_body {
        Some(RefOr::Ref(reference)) => {
            assignment.record(&reference.ref_location, tag);
        }
        Some(RefOr::T(body)) => record_content_refs(body.content.as_ref(), tag, assignment),
        None => {}
    }

    for callback in operation.callbacks.iter().flat_map(|callbacks| callbacks.values()) {
        if let Some(location) = callback.ref_location() {
            assignment.record(location, tag);
        }
    }

    for response in operation.responses.iter().flat_map(|responses| responses.values()) {
        match response {
            RefOr::Ref(reference) => {
                assignment.record(&reference.ref_location, tag);
            }
            RefOr::T(response) => {
                record_content_refs(response.content.as_ref(), tag, assignment);
            }
        }
    }
}

fn record_content_refs(
    content: Option<&IndexMap<String, MediaType>>,
    tag: &str,
    assignment: &mut TagAssignment,
) {
    for media_type in content.iter().flat_map(|content| content.values()) {
        if let Some(RefOr::Ref(reference)) = &media_type.schema {
            assignment.record(&reference.ref_location, tag);
        }
    }
}
