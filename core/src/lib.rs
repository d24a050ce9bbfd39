#![deny(missing_docs)]

//! # NDC OAS Core
//!
//! Core library of the OpenAPI to TypeScript functions generator: resolves
//! which schema components are relaxed types and classifies every route into
//! a typed function definition.

/// Shared error types.
pub mod error;

/// Generation settings.
pub mod config;

/// Header directive parsing.
pub mod headers;

/// OpenAPI (OAS) processing.
pub mod oas;

pub use config::GeneratorConfig;
pub use error::{AppError, AppResult};
pub use headers::parse_headers;
pub use oas::{
    build_registry, generate_functions_model, ApiRoute, FunctionsModel, Param, ParamKind,
    ParsedDocument, RouteClassifier, SchemaEntry, SchemaRegistry,
};
