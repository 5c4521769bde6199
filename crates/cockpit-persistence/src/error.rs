//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Errors from the local document store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to read the store document.
    #[error("failed to read store at {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store document.
    #[error("failed to write store at {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store document is not valid JSON for the expected shape.
    #[error("invalid store document: {0}")]
    Json(#[from] serde_json::Error),

    /// A keyed record was not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl PersistenceError {
    /// Convenience constructor for missing records.
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PersistenceError::not_found("project", 42);
        assert_eq!(err.to_string(), "project not found: 42");
    }
}
