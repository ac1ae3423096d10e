//! Error Types
//!
//! The main error type [`SceneError`] covers the failure modes of scene
//! deserialization: a registered parser rejecting its section of the data,
//! malformed fragments, and JSON decoding errors surfaced by parsers.
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SceneError>`.

use thiserror::Error;

/// The main error type for scene deserialization.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A registered parser failed while processing its section of the data.
    #[error("Parser '{parser}' failed: {message}")]
    Parser {
        /// Registration name of the failing parser
        parser: String,
        /// Description of what went wrong
        message: String,
    },

    /// A serialized fragment did not have the shape its parser expected.
    #[error("Invalid scene data: {0}")]
    InvalidData(String),

    /// JSON decoding error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
