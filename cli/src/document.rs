#![deny(missing_docs)]

//! # Document IO
//!
//! Reading parser output and writing render models, shared by all commands.

use crate::error::{CliError, CliResult};
use ndc_oas_core::ParsedDocument;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialization format picked from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON (default).
    Json,
    /// YAML (`.yaml` / `.yml`).
    Yaml,
}

impl Format {
    /// Picks the format for `path`, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Reads and decodes a parser output document.
pub fn read_document(path: &Path) -> CliResult<ParsedDocument> {
    if !path.exists() {
        return Err(CliError::General(format!(
            "Parsed document not found: {:?}",
            path
        )));
    }
    let content = fs::read_to_string(path)?;
    let doc = match Format::from_path(path) {
        Format::Yaml => ParsedDocument::from_yaml_str(&content)?,
        Format::Json => ParsedDocument::from_json_str(&content)?,
    };
    tracing::debug!(
        components = doc.components.len(),
        routes = doc.routes.len(),
        "decoded parsed document"
    );
    Ok(doc)
}

/// Serializes `value` and writes it to `output`, or prints JSON to stdout.
pub fn write_output<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let format = output.map(Format::from_path).unwrap_or(Format::Json);
    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|e| CliError::General(format!("YAML serialization failed: {}", e)))?,
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e)))?,
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)?;
            tracing::info!("output written to {:?}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a")), Format::Json);
    }

    #[test]
    fn test_missing_document() {
        let dir = tempdir().unwrap();
        let err = read_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CliError::General(_)));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out.yaml");
        write_output(&vec!["Api"], Some(out.as_path())).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("Api"));
    }
}
