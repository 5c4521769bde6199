//! Upstream client error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors talking to the upstream tracking service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, TLS, body read, decode).
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
