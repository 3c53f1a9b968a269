// File: src/error.rs
// Purpose: Failures of the page glue, surfaced to JavaScript as `Error`s

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GlueError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("form #{0} not found")]
    FormNotFound(String),

    #[error("element #{0} is not a form")]
    NotAForm(String),

    #[error("could not convert value: {0}")]
    Convert(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for GlueError {
    fn from(value: JsValue) -> Self {
        GlueError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for GlueError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        GlueError::Convert(err.to_string())
    }
}

impl From<serde_json::Error> for GlueError {
    fn from(err: serde_json::Error) -> Self {
        GlueError::Convert(err.to_string())
    }
}

impl From<GlueError> for JsValue {
    fn from(err: GlueError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
