//! Dataset loading
//!
//! [`HttpSource`] is the browser implementation of
//! [`explorer_core::DatasetSource`]; [`use_project_loader`] runs it once and
//! exposes the outcome as a signal.

use async_trait::async_trait;
use explorer_core::{DatasetSource, Error, ExplorerConfig, LoadState, RawResponse, load_projects};
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Fetches the dataset over HTTP with `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> explorer_core::Result<RawResponse> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string());
        response_from_body(status, body)
    }
}

/// Pairs the status with the body. An unreadable body on an error status
/// still yields a response, so the status reaches the user.
fn response_from_body(
    status: u16,
    body: std::result::Result<String, String>,
) -> explorer_core::Result<RawResponse> {
    match body {
        Ok(body) => Ok(RawResponse::new(status, body)),
        Err(reason) if !RawResponse::new(status, String::new()).is_success() => {
            tracing::debug!(status, reason = %reason, "error response body unreadable");
            Ok(RawResponse::new(status, String::new()))
        }
        Err(reason) => Err(Error::network(reason)),
    }
}

/// Starts loading the configured dataset; the signal begins at
/// [`LoadState::Loading`] and settles exactly once.
///
/// A result that arrives after the owning view is gone is dropped.
pub fn use_project_loader(config: &ExplorerConfig) -> ReadSignal<LoadState> {
    let (state, set_state) = signal(LoadState::Loading);
    let source = HttpSource::new(config.dataset_url.clone());

    spawn_local(async move {
        let loaded = load_projects(&source).await;
        if set_state.try_set(loaded).is_some() {
            tracing::debug!(url = source.url(), "view unmounted before the dataset arrived");
        }
    });

    state
}
