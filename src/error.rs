//! Error types for the notebook module
//!
//! Only start-up failures reach JavaScript. Everything that happens while
//! handling an event is logged at the point of failure and leaves the
//! document untouched.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level notebook error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotebookError {
    /// A required page element was not found by id
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// A DOM call failed or returned an unexpected type
    #[error("DOM error: {0}")]
    Dom(String),

    /// The configuration object could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The export payload could not be handed to the browser
    #[error("Download failed: {0}")]
    Download(String),
}

impl From<JsValue> for NotebookError {
    fn from(value: JsValue) -> Self {
        NotebookError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<NotebookError> for JsValue {
    fn from(err: NotebookError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NotebookError::MissingElement("divider".to_string()).to_string(),
            "Missing element: #divider"
        );
        assert_eq!(
            NotebookError::Download("blob rejected".to_string()).to_string(),
            "Download failed: blob rejected"
        );
    }
}
