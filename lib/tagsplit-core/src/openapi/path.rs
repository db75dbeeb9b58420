//! Path items, operations and their reference-bearing sub-objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{RefOr, Schema};

/// The eight HTTP verbs an OpenAPI path item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// All verb slots, in specification order.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];
}

/// A reusable parameter; only its `$ref` form matters to the splitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A callback definition; only its `$ref` form matters to the splitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    /// Callback fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// One media-type entry of a request or response content map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// The payload schema, inline or referenced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Remaining media-type fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content map keyed by media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    /// Remaining request-body fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A response definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Content map keyed by media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    /// Remaining response fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A single verb's definition on a path.
///
/// The splitter reads the declared tags and the reference-bearing fields;
/// everything else rides along opaquely and is emitted verbatim into the
/// partition the operation lands in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Declared tag list; empty or absent operations go to the default
    /// partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Operation-level parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,

    /// Request body, inline or referenced.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<RequestBody>>,

    /// Responses keyed by status code or `default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, RefOr<Response>>>,

    /// Callbacks keyed by expression name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, RefOr<Callback>>>,

    /// Remaining operation fields (operationId, summary, security, ...),
    /// preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A path's shared metadata plus up to eight verb slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// External reference of the path item itself.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_location: Option<String>,

    /// Short summary shared by all operations on the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Description shared by all operations on the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alternative servers for this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    /// Parameters shared by all operations on the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,

    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,

    /// Remaining path-item fields (extensions), preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PathItem {
    /// Returns the operation in the given verb slot, if present.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Returns the verb slot itself, for attaching an operation.
    pub fn operation_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// Iterates over the operations present on this path, in verb order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|operation| (method, operation)))
    }

    /// Copies the verb-independent fields into a fresh path item.
    ///
    /// Used when a path first appears in a partition: the shared metadata
    /// comes along, the verb slots start empty.
    pub fn without_operations(&self) -> Self {
        Self {
            ref_location: self.ref_location.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            servers: self.servers.clone(),
            parameters: self.parameters.clone(),
            extra: self.extra.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn path_item() -> PathItem {
        serde_json::from_value(json!({
            "summary": "Pets",
            "x-rate-limited": true,
            "parameters": [{"$ref": "#/components/parameters/PageSize"}],
            "get": {"tags": ["Pet"], "responses": {"200": {"description": "ok"}}},
            "post": {"responses": {"201": {"description": "created"}}}
        }))
        .expect("should parse")
    }

    #[test]
    fn should_iterate_operations_in_verb_order() {
        let item = path_item();

        let methods: Vec<HttpMethod> = item.operations().map(|(method, _)| method).collect();

        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    }

    #[test]
    fn should_copy_shared_fields_without_operations() {
        let item = path_item();

        let copy = item.without_operations();

        assert_eq!(copy.summary.as_deref(), Some("Pets"));
        assert_eq!(copy.parameters, item.parameters);
        assert_eq!(copy.extra.get("x-rate-limited"), Some(&json!(true)));
        assert_eq!(copy.operations().count(), 0);
    }

    #[test]
    fn should_keep_unknown_operation_fields() {
        let operation: Operation = serde_json::from_value(json!({
            "operationId": "listPets",
            "tags": ["Pet"],
            "deprecated": false
        }))
        .expect("should parse");

        assert_eq!(operation.extra.get("operationId"), Some(&json!("listPets")));
        let round_tripped = serde_json::to_value(&operation).expect("should serialize");
        assert_eq!(round_tripped.get("deprecated"), Some(&json!(false)));
    }

    #[test]
    fn should_parse_referenced_request_body() {
        let operation: Operation = serde_json::from_value(json!({
            "requestBody": {"$ref": "#/components/requestBodies/PetBody"}
        }))
        .expect("should parse");

        let location = operation
            .request_body
            .as_ref()
            .and_then(|body| body.ref_location());
        assert_eq!(location, Some("#/components/requestBodies/PetBody"));
    }
}
