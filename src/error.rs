//! Error types for pomo.

use thiserror::Error;

/// All errors that can occur in pomo.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local storage (task list, session file) failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A referenced item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON (de)serialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    ///
    /// `message` is the server's `message` field when the body is JSON,
    /// otherwise the raw body text.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Best-effort error message extracted from the body.
        message: String,
    },

    /// The request never completed (connection refused, DNS, timeout...).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered successfully but not with the shape expected.
    #[error("Unexpected API response: {0}")]
    UnexpectedResponse(String),
}
