#![deny(missing_docs)]

//! # OpenAPI Processing Module
//!
//! - **models**: Intermediate Representation definitions.
//! - **ingest**: Decoding of the document parser's output.
//! - **registry**: Schema components and relaxed-type resolution.
//! - **routes**: Route parameter classification.
//! - **pipeline**: Wiring of the phases above into a render model.

pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod routes;

pub use ingest::ParsedDocument;
pub use models::{
    ApiRoute, ComponentDescriptor, FieldSchema, Param, ParamKind, RawParam, RouteDescriptor,
    TypeNameEvent, TypeNameKind,
};
pub use pipeline::{build_registry, generate_functions_model, FunctionsModel};
pub use registry::{SchemaEntry, SchemaRegistry};
pub use routes::RouteClassifier;
