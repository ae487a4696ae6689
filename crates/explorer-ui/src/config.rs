//! Settings read from the host page
//!
//! `index.html` may carry an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="explorer-config">
//!   { "dataset_url": "https://example.com/projects.json" }
//! </script>
//! ```
//!
//! Anything missing, malformed or invalid falls back to
//! [`ExplorerConfig::default`] with a warning; a bad config never blocks the
//! page.

use explorer_core::ExplorerConfig;

use crate::error::{Result, UiError};

/// Id of the inline config element in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "explorer-config";

/// Reads the config block from the document, falling back to defaults.
#[must_use]
pub fn load_config() -> ExplorerConfig {
    match config_text() {
        Ok(text) => resolve_config(text.as_deref()),
        Err(e) => {
            tracing::warn!(error = %e, "config element unreadable, using defaults");
            ExplorerConfig::default()
        }
    }
}

/// Turns the raw text of the config element (if any) into a config.
#[must_use]
pub fn resolve_config(text: Option<&str>) -> ExplorerConfig {
    let Some(json) = text.map(str::trim).filter(|json| !json.is_empty()) else {
        tracing::debug!("no explorer config on the page, using defaults");
        return ExplorerConfig::default();
    };

    ExplorerConfig::from_json(json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring explorer config");
        ExplorerConfig::default()
    })
}

fn config_text() -> Result<Option<String>> {
    let document = web_sys::window()
        .ok_or(UiError::WindowUnavailable)?
        .document()
        .ok_or(UiError::DocumentUnavailable)?;

    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content()))
}
