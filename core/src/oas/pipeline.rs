#![deny(missing_docs)]

//! # Generation Pipeline
//!
//! Runs the phases in their required order: registry population, relaxed-type
//! classification, then route classification against the read-only registry.

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::oas::ingest::ParsedDocument;
use crate::oas::models::ApiRoute;
use crate::oas::registry::SchemaRegistry;
use crate::oas::routes::RouteClassifier;
use indexmap::IndexMap;
use serde::Serialize;

/// Component kind whose entries become registry components.
pub const SCHEMA_COMPONENT_KIND: &str = "schemas";

/// The render context handed to the functions template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionsModel {
    /// Classified routes in document order.
    pub api_routes: Vec<ApiRoute>,
    /// Types to import, the artifact name first.
    pub import_list: Vec<String>,
    /// Base URL, empty when not configured.
    pub base_url: String,
    /// Headers sent with every request.
    pub header_map: IndexMap<String, String>,
}

/// Populates and classifies a registry from a parsed document.
///
/// Only `schemas` components are registered.
pub fn build_registry(doc: &ParsedDocument) -> AppResult<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();
    for component in &doc.components {
        if component.component_name != SCHEMA_COMPONENT_KIND {
            tracing::debug!(
                kind = %component.component_name,
                component = %component.raw_type_name,
                "skipping non-schema component"
            );
            continue;
        }
        registry.add_component(component.clone());
    }
    for event in &doc.type_names {
        registry.add_type_name(event.clone());
    }
    registry.classify()?;
    Ok(registry)
}

/// Builds the functions render model for a parsed document.
pub fn generate_functions_model(
    doc: &ParsedDocument,
    config: &GeneratorConfig,
) -> AppResult<FunctionsModel> {
    let registry = build_registry(doc)?;
    let mut classifier = RouteClassifier::new(&registry, config)?;
    for route in &doc.routes {
        classifier.classify(route)?;
    }
    let (api_routes, import_list) = classifier.into_parts();

    Ok(FunctionsModel {
        api_routes,
        import_list,
        base_url: config.base_url.clone().unwrap_or_default(),
        header_map: config.headers.clone(),
    })
}
