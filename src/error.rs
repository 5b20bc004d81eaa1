//! Error types for the hackcast library.
//!
//! Commands at the binary layer wrap these in `anyhow` with context;
//! the library itself stays on a concrete error enum.

use thiserror::Error;

/// Errors produced by the hackcast library
#[derive(Debug, Error)]
pub enum HackcastError {
    /// IO error (config file, rubric document)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The rubric document could not be parsed into a usable rubric.
    /// Callers must treat this as "judging blocked", never as an
    /// empty rubric.
    #[error("rubric unavailable: {0}")]
    RubricUnavailable(String),

    /// A project id that is not in the catalog
    #[error("unknown project: {0}")]
    ProjectNotFound(String),

    /// AI gateway failure. Always recoverable: every call site defines
    /// a fallback value or UI state.
    #[error("AI gateway error: {0}")]
    Gateway(String),
}

/// Result type alias for hackcast operations
pub type Result<T> = std::result::Result<T, HackcastError>;
