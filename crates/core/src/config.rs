//! Explorer configuration.

use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::pagination::DEFAULT_WINDOW_RADIUS;
use crate::result::Result;

/// Dataset served when nothing else is configured.
pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";

/// Settings fixed for the lifetime of the app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Absolute http(s) URL returning the project array.
    pub dataset_url: String,
    /// Page buttons shown on each side of the current page.
    pub page_window_radius: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            page_window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl ExplorerConfig {
    /// Builder pattern: set dataset URL
    #[must_use]
    pub fn with_dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = url.into();
        self
    }

    /// Builder pattern: set page window radius
    #[must_use]
    pub const fn with_page_window_radius(mut self, radius: usize) -> Self {
        self.page_window_radius = radius;
        self
    }

    /// Parses a JSON config document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` when the document is not valid JSON or
    /// fails [`ExplorerConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::invalid_config(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the dataset URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.dataset_url).map_err(|e| {
            Error::invalid_config(format!("dataset_url '{}': {}", self.dataset_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::invalid_config(format!(
                "dataset_url must use http or https, got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::default();
        assert_eq!(config.page_window_radius, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ExplorerConfig::default()
            .with_dataset_url("http://localhost:8080/projects.json")
            .with_page_window_radius(2);
        assert_eq!(config.dataset_url, "http://localhost:8080/projects.json");
        assert_eq!(config.page_window_radius, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_relative_url_rejected() {
        let config = ExplorerConfig::default().with_dataset_url("/projects.json");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let config = ExplorerConfig::default().with_dataset_url("file:///tmp/projects.json");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = ExplorerConfig::from_json(r#"{"page_window_radius": 5}"#).unwrap();
        assert_eq!(config.page_window_radius, 5);
        assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(ExplorerConfig::from_json("{not json").is_err());
    }
}
