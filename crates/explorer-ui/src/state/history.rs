//! Address-bar access through the History API
//!
//! The explorer writes the URL itself instead of going through the router:
//! only the query string changes and the route stays `/`.

use wasm_bindgen::JsValue;

use crate::error::{Result, UiError};

/// How a new query string enters the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New entry; Back returns to the previous view.
    Push,
    /// Overwrites the current entry (mount-time normalization).
    Replace,
}

/// Current `location.search`, including its leading `?` when non-empty.
///
/// # Errors
///
/// Returns `UiError::WindowUnavailable` outside a browser or
/// `UiError::LocationUnavailable` when the location cannot be read.
pub fn current_search() -> Result<String> {
    let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
    window
        .location()
        .search()
        .map_err(|e| UiError::LocationUnavailable(UiError::describe(&e)))
}

/// Points the address bar at `query`, keeping the path and fragment.
///
/// # Errors
///
/// Returns `UiError::LocationUnavailable` if the current location cannot be
/// read, or `UiError::HistoryUpdateFailed` if the browser rejects the entry.
pub fn write_query(query: &str, mode: HistoryMode) -> Result<()> {
    let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
    let location = window.location();
    let pathname = location
        .pathname()
        .map_err(|e| UiError::LocationUnavailable(UiError::describe(&e)))?;
    let hash = location
        .hash()
        .map_err(|e| UiError::LocationUnavailable(UiError::describe(&e)))?;
    let url = location_with_query(&pathname, query, &hash);

    let history = window
        .history()
        .map_err(|e| UiError::HistoryUpdateFailed(UiError::describe(&e)))?;
    let written = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
    };
    written.map_err(|e| UiError::HistoryUpdateFailed(UiError::describe(&e)))?;

    tracing::debug!(url = %url, ?mode, "address bar updated");
    Ok(())
}

/// Relative URL for `pathname` with `query` (no leading `?`) and `hash`.
#[must_use]
pub fn location_with_query(pathname: &str, query: &str, hash: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        format!("{pathname}{hash}")
    } else {
        format!("{pathname}?{query}{hash}")
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
#[path = "history_test.rs"]
mod history_test;
