#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Settings that shape the render model but not the classification itself.

use indexmap::IndexMap;

/// Name of the API client artifact every generated functions file imports.
pub const DEFAULT_ARTIFACT_NAME: &str = "Api";

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed entry of every import list.
    pub artifact_name: String,
    /// Base URL the generated client calls.
    pub base_url: Option<String>,
    /// Headers sent with every request.
    pub headers: IndexMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            base_url: None,
            headers: IndexMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the headers from a `key1=value1&key2=value2` directive.
    pub fn with_header_directive(mut self, directive: Option<&str>) -> Self {
        self.headers = crate::headers::parse_headers(directive);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact() {
        let config = GeneratorConfig::default();
        assert_eq!(config.artifact_name, "Api");
        assert!(config.base_url.is_none());
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let config = GeneratorConfig::default()
            .with_base_url("https://api.example.com")
            .with_header_directive(Some("x-key=abc"));
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.headers["x-key"], "abc");
    }
}
