#![deny(missing_docs)]

//! # Components Command
//!
//! Prints the resolved schema registry: every component with its reference
//! id, names and relaxed-type classification.

use crate::document::{read_document, write_output};
use crate::error::CliResult;
use ndc_oas_core::{build_registry, SchemaEntry};
use std::path::PathBuf;

/// Arguments for the components command.
#[derive(clap::Args, Debug, Clone)]
pub struct ComponentsArgs {
    /// Path to the parser output (.json, .yaml or .yml).
    #[clap(long, env = "NDC_OAS_DOCUMENT_URI", default_value = "./parsed.json")]
    pub input: PathBuf,

    /// Output path. If not provided, prints JSON to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Only list relaxed components.
    #[clap(long)]
    pub relaxed_only: bool,
}

/// Executes the components command.
pub fn execute(args: &ComponentsArgs) -> CliResult<()> {
    let doc = read_document(&args.input)?;
    let registry = build_registry(&doc)?;
    let entries: Vec<&SchemaEntry> = registry
        .entries()
        .filter(|e| !args.relaxed_only || e.is_relaxed_type())
        .collect();
    write_output(&entries, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_relaxed_only_listing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("parsed.yaml");
        let output = dir.path().join("components.json");
        fs::write(
            &input,
            r##"
components:
  - componentName: schemas
    typeName: Node
    $ref: "#/components/schemas/Node"
    rawTypeData:
      properties:
        next: {$ref: "#/components/schemas/Node"}
        kind: {type: string, enum: [leaf, branch]}
  - componentName: schemas
    typeName: Plain
    $ref: "#/components/schemas/Plain"
typeNames:
  - {typeName: Node, schemaType: type-name}
"##,
        )
        .unwrap();

        execute(&ComponentsArgs {
            input,
            output: Some(output.clone()),
            relaxed_only: true,
        })
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let list = written.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["ref"], "#/components/schemas/Node");
        assert_eq!(list[0]["typeName"], "Node");
        assert_eq!(list[0]["isRelaxedType"], true);
    }
}
