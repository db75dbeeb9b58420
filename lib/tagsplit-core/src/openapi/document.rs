//! The top-level OpenAPI document, its tag declarations and components.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::PathItem;
use super::schema::{RefOr, Schema};

/// A declared tag: a name plus whatever else the document says about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag name; partition key in the split output.
    pub name: String,

    /// Remaining tag fields (description, externalDocs, ...), preserved
    /// verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Tag {
    /// Creates a tag carrying only a name, for partitions the document does
    /// not declare.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: IndexMap::new(),
        }
    }
}

/// The reusable component registry of a document.
///
/// Only schema components participate in the closure computation; the other
/// component kinds are parsed opaquely and are not distributed into
/// partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Schema components by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, RefOr<Schema>>,

    /// The other component kinds (responses, parameters, examples, ...),
    /// preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A parsed OpenAPI description document.
///
/// Loaded once and read-only thereafter; the global metadata blocks are
/// opaque to the splitter and copied into every partition as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// Specification version string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub openapi: String,

    /// Info block, copied into every partition.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub info: Value,

    /// Global servers, copied into every partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    /// Global security requirements, copied into every partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    /// Declared tags; each becomes one partition, plus the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// External documentation, copied into every partition.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,

    /// Path items by path string.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Top-level specification extensions, copied into every partition.
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl OpenApi {
    /// The schema components of the document, empty when absent.
    pub fn schemas(&self) -> Option<&IndexMap<String, RefOr<Schema>>> {
        self.components.as_ref().map(|components| &components.schemas)
    }
}
