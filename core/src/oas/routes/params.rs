#![deny(missing_docs)]

//! # Parameter Typing
//!
//! Turns validated raw parameters into TypeScript types.

use crate::oas::models::{BodyParam, Param, ParamKind, ParamShape, ScalarParam, TypeShape};
use serde_json::Value as JsonValue;

/// Description given to every body parameter.
pub const BODY_DESCRIPTION: &str = "Request body";

/// Maps an OpenAPI primitive to its TypeScript spelling.
///
/// Only `integer` differs; everything else passes through.
pub fn map_primitive(ty: &str) -> &str {
    match ty {
        "integer" => "number",
        other => other,
    }
}

/// Renders a type shape, e.g. `Array("integer")` -> `number[]`.
///
/// Reference arrays render as `any[]` until the classifier resolves them
/// against the registry.
pub fn render_type(shape: &TypeShape) -> String {
    match shape {
        TypeShape::Named(t) => map_primitive(t).to_string(),
        TypeShape::Array(item) => format!("{}[]", map_primitive(item)),
        TypeShape::ReferenceArray(_) => "any[]".to_string(),
    }
}

/// Renders an enumeration as a literal union type.
///
/// String enums are quoted (`"a" | "b"`); other enums use the raw literals
/// (`0 | 10 | 20`).
pub fn render_enum(base_type: Option<&str>, values: &[JsonValue]) -> String {
    let quote = base_type == Some("string");
    values
        .iter()
        .map(|v| {
            let text = literal_text(v);
            if quote {
                format!("\"{}\"", text)
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn literal_text(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Types a query or path parameter. The flag is true when it is an enum.
pub fn type_scalar_param(param: &ScalarParam, kind: ParamKind) -> (Param, bool) {
    let (ts_type, is_enum) = match &param.shape {
        ParamShape::Enum { base_type, values } => (render_enum(base_type.as_deref(), values), true),
        ParamShape::Typed(shape) => (render_type(shape), false),
    };
    let typed = Param {
        name: param.name.clone(),
        description: param.description.clone(),
        required: param.required,
        ts_type,
        format: param.format.clone(),
        param_type: kind,
    };
    (typed, is_enum)
}

/// Types the request body parameter.
pub fn type_body_param(body: &BodyParam) -> Param {
    Param {
        name: body.name.clone(),
        description: Some(BODY_DESCRIPTION.to_string()),
        required: body.required,
        ts_type: render_type(&body.shape),
        format: body.format.clone(),
        param_type: ParamKind::Body,
    }
}

/// Stable two-way partition: required parameters first, then the rest, each
/// group keeping its input order.
pub fn partition_by_optionality(params: Vec<Param>) -> Vec<Param> {
    let (mut required, optional): (Vec<_>, Vec<_>) =
        params.into_iter().partition(|p| p.required);
    required.extend(optional);
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;

    fn param(name: &str, required: bool) -> Param {
        Param {
            name: name.to_string(),
            description: None,
            required,
            ts_type: "string".to_string(),
            format: None,
            param_type: ParamKind::Query,
        }
    }

    #[test]
    fn test_string_enum_rendering() {
        assert_eq!(
            render_enum(Some("string"), &[json!("a"), json!("b")]),
            "\"a\" | \"b\""
        );
    }

    #[test]
    fn test_numeric_enum_rendering() {
        assert_eq!(
            render_enum(Some("integer"), &[json!(0), json!(10), json!(20)]),
            "0 | 10 | 20"
        );
        assert_eq!(render_enum(None, &[json!("x"), json!(true)]), "x | true");
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(render_type(&TypeShape::Named("integer".into())), "number");
        assert_eq!(render_type(&TypeShape::Named("boolean".into())), "boolean");
        assert_eq!(render_type(&TypeShape::Array("integer".into())), "number[]");
        assert_eq!(render_type(&TypeShape::Array("string".into())), "string[]");
        assert_eq!(
            render_type(&TypeShape::ReferenceArray("#/components/schemas/Tag".into())),
            "any[]"
        );
    }

    #[test]
    fn test_scalar_param_typing() {
        let raw = ScalarParam {
            name: "visibility".into(),
            description: Some("who can see it".into()),
            required: false,
            format: Some("int32".into()),
            shape: ParamShape::Enum {
                base_type: Some("integer".into()),
                values: vec![json!(0), json!(10)],
            },
        };
        let (typed, is_enum) = type_scalar_param(&raw, ParamKind::Query);
        assert!(is_enum);
        assert_eq!(typed.ts_type, "0 | 10");
        assert_eq!(typed.format.as_deref(), Some("int32"));
        assert_eq!(typed.param_type, ParamKind::Query);
    }

    #[test]
    fn test_body_param_typing() {
        let body = BodyParam {
            name: "data".into(),
            required: true,
            format: None,
            shape: TypeShape::Named("CreateBlogDto".into()),
            properties: IndexMap::new(),
        };
        let typed = type_body_param(&body);
        assert_eq!(typed.description.as_deref(), Some(BODY_DESCRIPTION));
        assert_eq!(typed.ts_type, "CreateBlogDto");
        assert_eq!(typed.param_type, ParamKind::Body);
    }

    #[test]
    fn test_partition_is_stable() {
        let params = vec![
            param("a", false),
            param("b", true),
            param("c", false),
            param("d", true),
            param("e", true),
        ];
        let sorted = partition_by_optionality(params);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn test_partition_of_empty_list() {
        assert!(partition_by_optionality(Vec::new()).is_empty());
    }
}
