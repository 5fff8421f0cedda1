//! Error types for the fallible surfaces of dotjson.
//!
//! Path reads and writes never fail: a miss is `None` or a no-op. Errors
//! only come from strict constructors and strict path parsing.

use thiserror::Error;

/// Errors produced by strict parsing and file helpers.
#[derive(Debug, Error)]
pub enum DotJsonError {
    /// The input was not valid JSON text.
    #[error("parse error: {0}")]
    Parse(String),

    /// The input parsed, but its top-level value is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The path string cannot address anything.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// I/O error while reading a document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DotJsonError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            DotJsonError::Io(e.into())
        } else {
            DotJsonError::Parse(e.to_string())
        }
    }
}

/// Convenience type alias for dotjson operations.
pub type Result<T> = std::result::Result<T, DotJsonError>;

/// Name of a JSON value's variant, for error messages.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
