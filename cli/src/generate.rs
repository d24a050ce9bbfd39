#![deny(missing_docs)]

//! # Generate Command
//!
//! Classifies every route of a parsed document and emits the functions render
//! model for the template renderer.

use crate::document::{read_document, write_output};
use crate::error::CliResult;
use ndc_oas_core::config::DEFAULT_ARTIFACT_NAME;
use ndc_oas_core::headers::join_header_args;
use ndc_oas_core::{generate_functions_model, GeneratorConfig};
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the parser output (.json, .yaml or .yml).
    #[clap(long, env = "NDC_OAS_DOCUMENT_URI", default_value = "./parsed.json")]
    pub input: PathBuf,

    /// Output path for the render model.
    /// Supports .json and .yaml/.yml extensions.
    /// If not provided, prints JSON to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Base URL of the API.
    #[clap(short = 'b', long, env = "NDC_OAS_BASE_URL")]
    pub base_url: Option<String>,

    /// Headers included in every request, as `key=value` (repeatable,
    /// or `key1=value1&key2=value2`).
    #[clap(short = 'H', long = "headers", env = "NDC_OAS_HEADERS")]
    pub headers: Vec<String>,

    /// Name of the API client artifact seeded into the import list.
    #[clap(long, default_value = DEFAULT_ARTIFACT_NAME)]
    pub artifact_name: String,
}

impl GenerateArgs {
    /// Builds the core configuration from the arguments.
    pub fn config(&self) -> GeneratorConfig {
        let directive = join_header_args(&self.headers);
        let mut config = GeneratorConfig {
            artifact_name: self.artifact_name.clone(),
            ..GeneratorConfig::default()
        }
        .with_header_directive(directive.as_deref());
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }
}

/// Executes the generate command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let doc = read_document(&args.input)?;
    let model = generate_functions_model(&doc, &args.config())?;
    tracing::info!(
        routes = model.api_routes.len(),
        imports = model.import_list.len(),
        "functions model generated"
    );
    write_output(&model, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(input: PathBuf, output: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            input,
            output,
            base_url: Some("https://api.example.com".into()),
            headers: vec!["x-a=1".into(), "x-b=2=3".into()],
            artifact_name: "Api".into(),
        }
    }

    #[test]
    fn test_config_from_args() {
        let config = args(PathBuf::from("in.json"), None).config();
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.headers["x-a"], "1");
        assert_eq!(config.headers["x-b"], "2=3");
    }

    #[test]
    fn test_generate_writes_model() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("parsed.json");
        let output = dir.path().join("out/functions.json");

        let doc = r##"{
            "components": [{
                "componentName": "schemas",
                "typeName": "Blog",
                "$ref": "#/components/schemas/Blog",
                "rawTypeData": {"properties": {"state": {"type": "string", "enum": ["a"]}}}
            }],
            "typeNames": [{"typeName": "Blog", "schemaType": "type-name"}],
            "routes": [{
                "method": "get",
                "route": "/blogs/{id}",
                "namespace": "blog",
                "routeName": "get",
                "response": {"type": "Blog", "errorType": "void"},
                "routeParams": {"path": [{"name": "id", "type": "string", "required": true}]}
            }]
        }"##;
        fs::write(&input, doc).unwrap();

        execute(&args(input, Some(output.clone()))).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["importList"], serde_json::json!(["Api", "Blog"]));
        assert_eq!(written["apiRoutes"][0]["functionName"], "getBlogGet");
        assert_eq!(written["apiRoutes"][0]["shouldAllowRelaxedTypes"], true);
        assert_eq!(written["baseUrl"], "https://api.example.com");
    }
}
