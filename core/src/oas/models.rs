#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Definition of Intermediate Representation (IR) structures exchanged with the
//! document parser (input side) and the template renderer (output side).
//!
//! Input values are decoded once in [`crate::oas::ingest`]; everything in this
//! module is already validated and typed.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// A node of a component's field-definition tree.
///
/// Only the keys that influence relaxed-type resolution and parameter typing
/// are kept; everything else the parser attaches is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// `$ref` to another component.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Primitive type (`string`, `integer`, `array`, ...).
    ///
    /// OAS 3.1 type lists such as `["string", "null"]` collapse to their
    /// first non-null entry.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_schema_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_type: Option<String>,
    /// Enumeration constraint.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<JsonValue>>,
    /// Array item shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    /// Nested object fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, FieldSchema>>,
}

impl FieldSchema {
    /// True if the field carries a non-empty enumeration.
    pub fn has_enum(&self) -> bool {
        self.enum_values.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// The `$ref` of the items when this field is an array.
    pub fn item_reference(&self) -> Option<&str> {
        if self.schema_type.as_deref() != Some("array") {
            return None;
        }
        self.items.as_ref().and_then(|i| i.reference.as_deref())
    }
}

/// Schema type can be a single type or a list of types (for nullable).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SchemaTypeForm {
    Single(String),
    Multiple(Vec<String>),
}

/// Decodes a `type` key given either as a string or as an OAS 3.1 list.
pub(crate) fn deserialize_schema_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SchemaTypeForm>::deserialize(deserializer)? {
        Some(SchemaTypeForm::Single(t)) => Some(t),
        Some(SchemaTypeForm::Multiple(types)) => types.into_iter().find(|t| t != "null"),
        None => None,
    })
}

/// A schema component as announced by the document parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    /// Component kind (`schemas`, `responses`, `requestBodies`, ...).
    pub component_name: String,
    /// Identifier used inside the source document.
    pub raw_type_name: String,
    /// Document-defined reference path, if the parser supplied one.
    pub reference: Option<String>,
    /// Field definitions; `None` for components without `properties`.
    pub properties: Option<IndexMap<String, FieldSchema>>,
}

/// Kind tag carried by a name-assignment event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeNameKind {
    /// A plain type name that ends up as a generated type.
    TypeName,
    /// The key of an enum member.
    EnumKey,
}

/// One raw-name to generated-name assignment made by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNameEvent {
    /// Name assigned in the generated output.
    pub type_name: String,
    /// Name in the source document. Defaults to `type_name` when absent.
    #[serde(default)]
    pub raw_type_name: Option<String>,
    /// Optional kind tag.
    #[serde(default)]
    pub schema_type: Option<TypeNameKind>,
}

/// Target type of a parameter after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A primitive or named type (`string`, `integer`, `CreateBlogDto`).
    Named(String),
    /// An array of the given item type.
    Array(String),
    /// An array whose items are only given as a `$ref` to a component.
    ReferenceArray(String),
}

/// Shape of a query or path parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamShape {
    /// A non-empty enumeration of literal values.
    Enum {
        /// Declared primitive type of the literals, if any.
        base_type: Option<String>,
        /// The literal values.
        values: Vec<JsonValue>,
    },
    /// A plain or array type.
    Typed(TypeShape),
}

/// A query or path parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarParam {
    /// Parameter name.
    pub name: String,
    /// Description from the document.
    pub description: Option<String>,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Format hint (`int32`, `date-time`, ...).
    pub format: Option<String>,
    /// Resolved shape.
    pub shape: ParamShape,
}

/// The request body of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParam {
    /// Name of the generated function argument.
    pub name: String,
    /// Whether the body is mandatory.
    pub required: bool,
    /// Format hint.
    pub format: Option<String>,
    /// Body type.
    pub shape: TypeShape,
    /// Top-level fields of the body schema.
    pub properties: IndexMap<String, FieldSchema>,
}

/// A raw route parameter, tagged by where it is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum RawParam {
    /// Query string parameter.
    Query(ScalarParam),
    /// Path template parameter.
    Path(ScalarParam),
    /// Request body.
    Body(BodyParam),
}

/// Pre-rendered query argument object the parser groups query parameters into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryArgument {
    /// Name of the argument.
    pub name: Option<String>,
    /// Rendered type of the argument.
    #[serde(rename = "type")]
    pub content: Option<String>,
}

/// Response type strings of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTypes {
    /// Success payload type.
    #[serde(rename = "type")]
    pub success: String,
    /// Error payload type.
    #[serde(rename = "errorType")]
    pub error: String,
}

/// A validated route descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    /// HTTP method as given by the parser (usually lowercase).
    pub method: String,
    /// Path template (e.g. `/blogs/{blogId}`).
    pub path: String,
    /// Short summary.
    pub summary: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Namespace the parser put the route under.
    pub namespace: String,
    /// Base function name inside the namespace.
    pub base_name: String,
    /// Response types.
    pub response: ResponseTypes,
    /// Parameters in source order: query, then path, then body.
    pub params: Vec<RawParam>,
    /// Grouped query argument, passed through untouched.
    pub query_argument: Option<QueryArgument>,
}

/// Where a generated parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Query string.
    Query,
    /// Path template.
    Path,
    /// Request body.
    Body,
}

/// A fully typed parameter of a generated function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// TypeScript type.
    pub ts_type: String,
    /// Format hint.
    pub format: Option<String>,
    /// Location.
    pub param_type: ParamKind,
}

/// The classified route handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoute {
    /// Upper-cased HTTP method.
    #[serde(rename = "type")]
    pub method: String,
    /// Path template.
    pub route: String,
    /// Sanitized success type.
    pub success_type: String,
    /// Sanitized error type.
    pub error_type: String,
    /// Summary (falls back to the description).
    pub description: Option<String>,
    /// Namespace.
    pub namespace: String,
    /// Base function name in the API client.
    pub api_function: String,
    /// Unique generated function name.
    pub function_name: String,
    /// Grouped query argument.
    pub query_argument: Option<QueryArgument>,
    /// Query parameters in source order.
    pub query_params: Vec<Param>,
    /// Path parameters in source order.
    pub path_params: Vec<Param>,
    /// Body parameter.
    pub body_param: Option<Param>,
    /// All parameters, required first.
    pub all_params: Vec<Param>,
    /// True for `GET` routes.
    pub is_query: bool,
    /// The result must be wrapped in JSON before being returned.
    #[serde(rename = "shouldWrapReturnResultInJSON")]
    pub should_wrap_return_result_in_json: bool,
    /// The function needs the relaxed-types annotation.
    pub should_allow_relaxed_types: bool,
    /// Success type is `void`.
    pub success_response_is_void: bool,
    /// Success and error types are both `void`.
    pub success_and_error_response_is_void: bool,
}
