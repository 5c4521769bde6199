//! Service error types.

use thiserror::Error;

use cockpit_persistence::PersistenceError;
use cockpit_upstream::UpstreamError;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors from the repository and mutation service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Project or work item absent.
    #[error("{0}")]
    NotFound(String),

    /// Upstream call failed.
    #[error(transparent)]
    Upstream(UpstreamError),

    /// Local store read or write failed.
    #[error(transparent)]
    Persistence(PersistenceError),
}

impl From<PersistenceError> for ServiceError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { .. } => ServiceError::NotFound(err.to_string()),
            other => ServiceError::Persistence(other),
        }
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(err: UpstreamError) -> Self {
        match &err {
            UpstreamError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND => {
                ServiceError::NotFound(err.to_string())
            }
            _ => ServiceError::Upstream(err),
        }
    }
}
