//! Error types for the browser shell
//!
//! Dataset failures are `explorer_core::Error`; these cover the pieces that
//! talk to the window, the address bar and the host page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while touching browser APIs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No `window` global (not running in a browser)
    #[error("browser window is not available")]
    WindowUnavailable,
    /// The window has no document
    #[error("browser document is not available")]
    DocumentUnavailable,
    /// Reading `window.location` failed
    #[error("could not read location: {0}")]
    LocationUnavailable(String),
    /// `history.pushState` / `replaceState` failed
    #[error("history update failed: {0}")]
    HistoryUpdateFailed(String),
}

impl UiError {
    /// Describes a JS exception for one of the string-carrying variants.
    pub(crate) fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UiError::WindowUnavailable.to_string(),
            "browser window is not available"
        );
        assert_eq!(
            UiError::HistoryUpdateFailed("SecurityError".to_string()).to_string(),
            "history update failed: SecurityError"
        );
        assert_eq!(
            UiError::LocationUnavailable("denied".to_string()).to_string(),
            "could not read location: denied"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::DocumentUnavailable;
        assert_eq!(error.clone(), error);
    }
}
