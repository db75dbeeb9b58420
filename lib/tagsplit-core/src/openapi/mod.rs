//! A lossless serde model of the parts of an OpenAPI document the splitter
//! reads.
//!
//! The model follows the `RefOr`/`Ref` design of utoipa's OpenAPI types but
//! is hand-rolled: the splitter has to see `$ref`s in places utoipa does not
//! model (path-item level, parameters, callbacks). Every object carries a
//! flattened remainder map so fields the algorithm never inspects round-trip
//! verbatim into the output partitions.

mod document;
mod path;
mod schema;

pub use self::document::{Components, OpenApi, Tag};
pub use self::path::{
    Callback, HttpMethod, MediaType, Operation, Parameter, PathItem, RequestBody, Response,
};
pub use self::schema::{Ref, RefOr, SCHEMA_REF_PREFIX, Schema, schema_component_name};
