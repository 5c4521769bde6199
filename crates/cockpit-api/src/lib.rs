//! HTTP API for the project cockpit.
//!
//! Thin routing layer over the repository and mutation service:
//! - Project listing, detail, and aggregate summary
//! - Work-package patches and offer upserts
//! - Liveness endpoint
//!
//! Errors map to 404 for missing resources and 500 for everything else,
//! always with a `{"message": ...}` body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
