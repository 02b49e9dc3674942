//! Error types for page initialization and event handling.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::panels::PanelName;

/// Errors raised while wiring or driving the page UI.
#[derive(Error, Debug)]
pub enum UiError {
    /// `window` is not available (not running in a browser).
    #[error("window is unavailable")]
    NoWindow,

    /// `window.document` is not available.
    #[error("document is unavailable")]
    NoDocument,

    /// `document.body` is not available.
    #[error("document body is unavailable")]
    NoBody,

    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// A string did not name one of the fixed panels.
    #[error("unknown panel name: {0:?}")]
    UnknownPanel(String),

    /// A known panel has no element in the page markup.
    #[error("panel not found: {0}")]
    MissingPanel(PanelName),

    /// `localStorage` is disabled or rejected a write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// `window.RA_UI_CONFIG` could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for UiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        UiError::Config(err.to_string())
    }
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
