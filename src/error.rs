//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure talking to the hosted backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,

    #[error("browser error: {0}")]
    Js(String),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Invalid or missing build configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),

    #[error("backend url must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}
