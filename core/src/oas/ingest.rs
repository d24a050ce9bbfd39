#![deny(missing_docs)]

//! # Document Ingestion
//!
//! Decodes the document parser's output into the typed models of
//! [`crate::oas::models`].
//!
//! The parser hands over loosely-typed records; local shims absorb that
//! looseness and are validated exactly once here.

use crate::error::{AppError, AppResult};
use crate::oas::models::{
    deserialize_schema_type, BodyParam, ComponentDescriptor, FieldSchema, ParamShape, QueryArgument, RawParam,
    ResponseTypes, RouteDescriptor, ScalarParam, TypeNameEvent, TypeShape,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Everything the document parser produced for a single document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Discovered schema components in discovery order.
    pub components: Vec<ComponentDescriptor>,
    /// Name assignments in the order the parser made them.
    pub type_names: Vec<TypeNameEvent>,
    /// Route descriptors.
    pub routes: Vec<RouteDescriptor>,
}

impl ParsedDocument {
    /// Decodes a document from a JSON string.
    pub fn from_json_str(input: &str) -> AppResult<Self> {
        let raw: JsonValue = serde_json::from_str(input)
            .map_err(|e| AppError::Decode(format!("Failed to parse JSON: {}", e)))?;
        Self::from_value(raw)
    }

    /// Decodes a document from a YAML string.
    pub fn from_yaml_str(input: &str) -> AppResult<Self> {
        let raw: JsonValue = serde_yaml::from_str(input)
            .map_err(|e| AppError::Decode(format!("Failed to parse YAML: {}", e)))?;
        Self::from_value(raw)
    }

    /// Decodes a document from an already parsed JSON value.
    pub fn from_value(raw: JsonValue) -> AppResult<Self> {
        let shim: ShimDocument = serde_json::from_value(raw)
            .map_err(|e| AppError::Decode(format!("Invalid parser output: {}", e)))?;

        Ok(Self {
            components: shim.components.into_iter().map(Into::into).collect(),
            type_names: shim.type_names,
            routes: shim.routes.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShimDocument {
    #[serde(default)]
    components: Vec<ShimComponent>,
    #[serde(default)]
    type_names: Vec<TypeNameEvent>,
    #[serde(default)]
    routes: Vec<ShimRoute>,
}

/// A schema component as emitted by the parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShimComponent {
    /// Component kind.
    pub component_name: String,
    /// Raw type name.
    pub type_name: String,
    /// Reference path.
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    /// Source schema.
    #[serde(default)]
    pub raw_type_data: Option<ShimRawTypeData>,
}

/// The source schema attached to a component.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimRawTypeData {
    /// Field definitions.
    #[serde(default)]
    pub properties: Option<IndexMap<String, FieldSchema>>,
}

impl From<ShimComponent> for ComponentDescriptor {
    fn from(shim: ShimComponent) -> Self {
        Self {
            component_name: shim.component_name,
            raw_type_name: shim.type_name,
            reference: shim.reference.filter(|r| !r.is_empty()),
            properties: shim.raw_type_data.and_then(|d| d.properties),
        }
    }
}

/// A route as emitted by the parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShimRoute {
    /// HTTP method.
    pub method: String,
    /// Path template.
    pub route: String,
    /// Summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Namespace.
    #[serde(default)]
    pub namespace: String,
    /// Base function name.
    pub route_name: String,
    /// Response types.
    pub response: ResponseTypes,
    /// Query and path parameters.
    #[serde(default)]
    pub route_params: ShimRouteParams,
    /// Request body.
    #[serde(default)]
    pub request_body_info: Option<ShimRequestBody>,
    /// Pre-rendered arguments.
    #[serde(default)]
    pub specific_args: Option<ShimSpecificArgs>,
}

/// Parameter arrays of a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimRouteParams {
    /// Query parameters.
    #[serde(default)]
    pub query: Vec<ShimRouteParam>,
    /// Path parameters.
    #[serde(default)]
    pub path: Vec<ShimRouteParam>,
}

/// Pre-rendered arguments of a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimSpecificArgs {
    /// Grouped query argument.
    #[serde(default)]
    pub query: Option<QueryArgument>,
}

/// A local shim for route parameters.
///
/// Accepts both the OAS 3.x `schema` form and the legacy Swagger 2.0
/// top-level `type`/`items` form.
#[derive(Debug, Clone, Deserialize)]
pub struct ShimRouteParam {
    /// Name of the parameter.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: Option<bool>,
    /// Primitive type.
    #[serde(rename = "type", default, deserialize_with = "deserialize_schema_type")]
    pub schema_type: Option<String>,
    /// Format modifier.
    #[serde(default)]
    pub format: Option<String>,
    /// Enumeration.
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<JsonValue>>,
    /// OAS 3.x schema.
    #[serde(default)]
    pub schema: Option<FieldSchema>,
    /// Swagger 2.0 item schema.
    #[serde(default)]
    pub items: Option<FieldSchema>,
}

/// A local shim for the request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShimRequestBody {
    /// Body type name; no body when absent.
    #[serde(rename = "type", default, deserialize_with = "deserialize_schema_type")]
    pub schema_type: Option<String>,
    /// Argument name.
    #[serde(default)]
    pub param_name: Option<String>,
    /// Whether the body is required.
    #[serde(default)]
    pub required: Option<bool>,
    /// Format modifier.
    #[serde(default)]
    pub format: Option<String>,
    /// Body schema.
    #[serde(default)]
    pub schema: Option<FieldSchema>,
}

const DEFAULT_BODY_NAME: &str = "data";
const ANY_TYPE: &str = "any";

impl From<ShimRoute> for RouteDescriptor {
    fn from(shim: ShimRoute) -> Self {
        let mut params = Vec::new();
        for p in shim.route_params.query {
            params.push(RawParam::Query(scalar_param(&shim.route, p)));
        }
        for p in shim.route_params.path {
            params.push(RawParam::Path(scalar_param(&shim.route, p)));
        }
        if let Some(body) = shim
            .request_body_info
            .and_then(|body| body_param(&shim.route, body))
        {
            params.push(RawParam::Body(body));
        }

        Self {
            method: shim.method,
            path: shim.route,
            summary: shim.summary,
            description: shim.description,
            namespace: shim.namespace,
            base_name: shim.route_name,
            response: shim.response,
            params,
            query_argument: shim.specific_args.and_then(|a| a.query),
        }
    }
}

fn scalar_param(route: &str, p: ShimRouteParam) -> ScalarParam {
    let schema_type = p
        .schema_type
        .clone()
        .or_else(|| p.schema.as_ref().and_then(|s| s.schema_type.clone()));

    let enum_values = p
        .enum_values
        .clone()
        .or_else(|| p.schema.as_ref().and_then(|s| s.enum_values.clone()))
        .filter(|v| !v.is_empty());

    let shape = match enum_values {
        Some(values) => ParamShape::Enum {
            base_type: schema_type,
            values,
        },
        None => {
            let items = p
                .schema
                .as_ref()
                .and_then(|s| s.items.as_deref())
                .or(p.items.as_ref());
            ParamShape::Typed(type_shape(route, &p.name, schema_type, items))
        }
    };

    ScalarParam {
        name: p.name,
        description: p.description,
        required: p.required.unwrap_or(false),
        format: p.format,
        shape,
    }
}

fn body_param(route: &str, body: ShimRequestBody) -> Option<BodyParam> {
    let schema_type = body.schema_type.filter(|t| !t.is_empty())?;
    let name = body.param_name.unwrap_or_else(|| DEFAULT_BODY_NAME.to_string());
    let items = body.schema.as_ref().and_then(|s| s.items.as_deref());
    let shape = type_shape(route, &name, Some(schema_type), items);
    let properties = body
        .schema
        .and_then(|s| s.properties)
        .unwrap_or_default();

    Some(BodyParam {
        name,
        required: body.required.unwrap_or(false),
        format: body.format,
        shape,
        properties,
    })
}

fn type_shape(
    route: &str,
    name: &str,
    schema_type: Option<String>,
    items: Option<&FieldSchema>,
) -> TypeShape {
    match schema_type.as_deref() {
        Some("array") => match items {
            Some(FieldSchema {
                schema_type: Some(item_type),
                ..
            }) => TypeShape::Array(item_type.clone()),
            Some(FieldSchema {
                reference: Some(reference),
                ..
            }) => TypeShape::ReferenceArray(reference.clone()),
            _ => {
                tracing::warn!(route, param = name, "array without an item type, using 'any[]'");
                TypeShape::Array(ANY_TYPE.to_string())
            }
        },
        Some(t) => TypeShape::Named(t.to_string()),
        None => {
            tracing::warn!(route, param = name, "parameter without a type, using 'any'");
            TypeShape::Named(ANY_TYPE.to_string())
        }
    }
}
