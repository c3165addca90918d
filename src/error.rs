//! Error types for the API boundary
//!
//! The core pipeline never fails (bad input degrades to diagnostics on
//! the glyph model); the only fallible step is handing the model across
//! the WASM boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the wasm API layer
#[derive(Debug, Clone, Error)]
pub enum TranscribeError {
    /// The glyph model could not be serialized for JavaScript
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<TranscribeError> for JsValue {
    fn from(err: TranscribeError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
