//! The split pipeline: registry, partitioner, resolver, distributor.

use indexmap::IndexMap;

use crate::openapi::OpenApi;

use super::distributor::distribute_components;
use super::partition::SplitOutcome;
use super::partitioner::partition_document;
use super::registry::TagRegistry;
use super::resolver::{TagAssignment, resolve_closure};

/// Splits a document into one self-contained partition per tag.
///
/// Runs the four phases in order over the in-memory document: enumerate the
/// partitions, assign operations and seed the reference graph, resolve the
/// reference closure, and materialize each partition's components. Pure
/// transform, no I/O; the tag assignment is threaded through the phases as
/// an explicit value.
pub fn split_by_tags(document: &OpenApi) -> SplitOutcome {
    let registry = TagRegistry::from_document(document);
    let mut assignment = TagAssignment::default();

    let mut partitions = partition_document(document, &registry, &mut assignment);

    let empty_schemas = IndexMap::new();
    let schemas = document.schemas().unwrap_or(&empty_schemas);
    let dangling = resolve_closure(&mut assignment, schemas);
    distribute_components(schemas, &assignment, &mut partitions);

    SplitOutcome {
        partitions,
        dangling,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::split::registry::DEFAULT_TAG;

    use super::*;

    #[test]
    fn should_split_document_without_components() {
        let document: OpenApi = serde_json::from_value(json!({
            "openapi": "3.0.1",
            "info": {"title": "t", "version": "1"},
            "tags": [{"name": "Pet"}],
            "paths": {
                "/pets": {"get": {"tags": ["Pet"], "responses": {"200": {"description": "ok"}}}}
            }
        }))
        .expect("should parse");

        let outcome = split_by_tags(&document);

        assert_eq!(outcome.partition_count(), 2);
        assert!(outcome.dangling.is_empty());
        let pet = outcome.partition("Pet").expect("pet partition");
        assert!(pet.document.paths.contains_key("/pets"));
        assert!(outcome.partition(DEFAULT_TAG).is_some());
    }

    #[test]
    fn should_carry_closure_through_all_phases() {
        let document: OpenApi = serde_json::from_value(json!({
            "openapi": "3.0.1",
            "info": {"title": "t", "version": "1"},
            "tags": [{"name": "Pet"}],
            "paths": {
                "/pets": {
                    "get": {
                        "tags": ["Pet"],
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/PetList"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "PetList": {
                        "type": "array",
                        "items": {"$ref": "#/components/schemas/Pet"}
                    },
                    "Pet": {"type": "object"}
                }
            }
        }))
        .expect("should parse");

        let outcome = split_by_tags(&document);

        let components = outcome
            .partition("Pet")
            .and_then(|partition| partition.document.components.as_ref())
            .expect("components present");
        assert!(components.schemas.contains_key("PetList"));
        assert!(components.schemas.contains_key("Pet"));
    }
}
