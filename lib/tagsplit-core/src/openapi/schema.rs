//! Schema objects and `$ref` handling.
//!
//! Schema components form the nodes of the dependency graph walked by the
//! closure resolver: a property referencing another schema, or an array
//! property whose items reference one, is a directed edge.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Location prefix identifying schema-kind component references.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// A reference to a reusable component by location string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    /// Reference location, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub ref_location: String,
}

impl Ref {
    /// Creates a reference from a full location string.
    pub fn new(ref_location: impl Into<String>) -> Self {
        Self {
            ref_location: ref_location.into(),
        }
    }

    /// Creates a schema-kind reference from a component name.
    pub fn schema(name: impl AsRef<str>) -> Self {
        Self::new(format!("{SCHEMA_REF_PREFIX}{}", name.as_ref()))
    }
}

/// Either a [`Ref`] or a concrete value.
///
/// Deserialization prefers the reference form: any object carrying a `$ref`
/// key parses as [`RefOr::Ref`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// A reference to a component defined elsewhere.
    Ref(Ref),
    /// An inline value.
    T(T),
}

impl<T> RefOr<T> {
    /// Returns the reference location when this is the `Ref` variant.
    pub fn ref_location(&self) -> Option<&str> {
        match self {
            Self::Ref(reference) => Some(reference.ref_location.as_str()),
            Self::T(_) => None,
        }
    }
}

/// A schema component definition.
///
/// Only the fields the dependency graph needs are modeled; everything else
/// is captured opaquely and round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Declared type; a string, or an array of strings in OpenAPI 3.1.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Value>,

    /// Object properties, each a schema or a reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RefOr<Schema>>>,

    /// Array item type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<RefOr<Schema>>>,

    /// Remaining schema fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Schema {
    /// Whether the declared type is (or includes) `array`.
    pub fn is_array(&self) -> bool {
        match &self.schema_type {
            Some(Value::String(ty)) => ty == "array",
            Some(Value::Array(types)) => types.iter().any(|ty| ty == "array"),
            _ => false,
        }
    }

    /// Outgoing reference edges of this schema.
    ///
    /// An edge is a property that is itself a reference, a property declared
    /// as an array whose item type is a reference, or the schema's own item
    /// type reference when the schema itself is an array.
    pub fn reference_edges(&self) -> impl Iterator<Item = &str> {
        let own_items = self
            .is_array()
            .then(|| self.items.as_deref().and_then(|items| items.ref_location()))
            .flatten();
        self.properties
            .iter()
            .flat_map(|properties| properties.values())
            .filter_map(|property| match property {
                RefOr::Ref(reference) => Some(reference.ref_location.as_str()),
                RefOr::T(schema) if schema.is_array() => {
                    schema.items.as_deref().and_then(|items| items.ref_location())
                }
                RefOr::T(_) => None,
            })
            .chain(own_items)
    }
}

/// Extracts the component name from a schema-kind reference location.
///
/// Returns `None` for references of any other kind (responses, parameters,
/// ...), which the resolver leaves untraversed.
pub fn schema_component_name(ref_location: &str) -> Option<&str> {
    ref_location
        .strip_prefix(SCHEMA_REF_PREFIX)
        .filter(|name| !name.is_empty())
}
