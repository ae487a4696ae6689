//! Dataset loading contract.
//!
//! The network itself lives behind [`DatasetSource`]; this module turns
//! whatever the source returns into a [`LoadState`] the UI can render.

use async_trait::async_trait;

use crate::error::Error;
use crate::record::Project;
use crate::result::Result;

/// Status and body of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Where the dataset comes from.
///
/// Futures are not `Send`: the browser implementation runs on the single
/// WASM thread.
#[async_trait(?Send)]
pub trait DatasetSource {
    /// Performs one request for the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns `Error::Network` when no response was received.
    async fn fetch(&self) -> Result<RawResponse>;
}

/// Loader status as seen by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Project>),
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded records; empty while loading or after a failure.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loaded(projects) => projects.as_slice(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

impl From<Result<Vec<Project>>> for LoadState {
    fn from(result: Result<Vec<Project>>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(e) => Self::Failed(format!("Error: {e}")),
        }
    }
}

/// Checks the status and decodes the body as a JSON array of projects.
///
/// # Errors
///
/// Returns `Error::HttpStatus` for a non-2xx status and
/// `Error::JsonParseFailed` when the body is not a project array.
pub fn parse_response(response: RawResponse) -> Result<Vec<Project>> {
    if !response.is_success() {
        return Err(Error::HttpStatus {
            status: response.status,
        });
    }
    serde_json::from_str(&response.body)
        .map_err(|e| Error::json_parse_failed(response.status, e.to_string()))
}

/// Fetches once and parses; no retry.
pub async fn load_projects<S: DatasetSource + ?Sized>(source: &S) -> LoadState {
    let result = source.fetch().await.and_then(parse_response);
    match &result {
        Ok(projects) => tracing::info!(count = projects.len(), "dataset loaded"),
        Err(e) => tracing::warn!(status = e.status(), "dataset load failed: {}", e),
    }
    LoadState::from(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<RawResponse>);

    #[async_trait(?Send)]
    impl DatasetSource for FixedSource {
        async fn fetch(&self) -> Result<RawResponse> {
            self.0.clone()
        }
    }

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_parse_response_array() {
        let body = r#"[{"s.no": 1, "percentage.funded": 50, "amt.pledged": 1000}]"#;
        let projects = parse_response(RawResponse::new(200, body));
        assert_eq!(projects, Ok(vec![Project::new(1, 50.0, 1000.0)]));
    }

    #[test]
    fn test_parse_response_rejects_non_array() {
        let result = parse_response(RawResponse::new(200, r#"{"s.no": 1}"#));
        assert!(matches!(result, Err(Error::JsonParseFailed { status: 200, .. })));
    }

    #[test]
    fn test_parse_response_status_checked_before_body() {
        let result = parse_response(RawResponse::new(404, "[]"));
        assert_eq!(result, Err(Error::HttpStatus { status: 404 }));
    }

    #[test]
    fn test_parse_response_one_bad_row_rejects_dataset() {
        let body = r#"[
            {"s.no": 1, "percentage.funded": 50, "amt.pledged": 1000},
            {"s.no": 2, "percentage.funded": null, "amt.pledged": 1100}
        ]"#;
        let result = parse_response(RawResponse::new(200, body));
        assert!(matches!(result, Err(Error::JsonParseFailed { status: 200, .. })));
    }

    #[test]
    fn test_parse_response_empty_error_body_keeps_status() {
        let result = parse_response(RawResponse::new(503, ""));
        assert_eq!(result, Err(Error::HttpStatus { status: 503 }));
    }

    #[test]
    fn test_load_state_accessors() {
        let loaded = LoadState::Loaded(vec![Project::new(1, 0.0, 0.0)]);
        assert!(!loaded.is_loading());
        assert_eq!(loaded.projects().len(), 1);
        assert_eq!(loaded.error_message(), None);

        let failed = LoadState::Failed("Error: boom".to_string());
        assert!(failed.projects().is_empty());
        assert_eq!(failed.error_message(), Some("Error: boom"));

        assert!(LoadState::default().is_loading());
    }

    #[tokio::test]
    async fn test_load_projects_http_500_reports_status() {
        let source = FixedSource(Ok(RawResponse::new(500, "Internal Server Error")));
        let state = load_projects(&source).await;
        let message = state.error_message().map(str::to_owned);
        assert!(message.is_some_and(|m| m.contains("500")));
        assert!(state.projects().is_empty());
    }

    #[tokio::test]
    async fn test_load_projects_network_failure() {
        let source = FixedSource(Err(Error::network("connection refused")));
        let state = load_projects(&source).await;
        assert_eq!(
            state,
            LoadState::Failed(
                "Error: failed to load projects: network error: connection refused".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_load_projects_success() {
        let body = r#"[
            {"s.no": 2, "percentage.funded": 55, "amt.pledged": 1100},
            {"s.no": 1, "percentage.funded": 50, "amt.pledged": 1000}
        ]"#;
        let source = FixedSource(Ok(RawResponse::new(200, body)));
        let state = load_projects(&source).await;
        assert_eq!(state.projects().len(), 2);
        assert!(state.error_message().is_none());
    }
}
