//! Error type shared by every behavior installer and handler.
//!
//! Nothing here is shown to the visitor. Errors are logged and the affected
//! behavior stays inactive.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LandingError {
    /// The configuration block could not be parsed or failed validation.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A browser API call threw.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// An FAQ question has no answer element immediately after it.
    #[error("faq question {index} has no adjacent answer")]
    MissingAnswer { index: usize },

    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for LandingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
