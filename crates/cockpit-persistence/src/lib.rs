//! Local document store for the project cockpit.
//!
//! In mock mode the cockpit persists all projects in a single JSON document
//! (`{ "projects": [...] }`), each project embedding its own work packages
//! and offers. The [`ProjectStore`] trait is the seam callers depend on;
//! the file-backed implementation rewrites the whole document per mutation
//! using atomic write-then-rename, so a crash never leaves a torn file.
//! Concurrent writers are not synchronized against each other (last write
//! wins); an implementation with locking can be slotted in behind the trait
//! without touching callers.

pub mod atomic;
pub mod error;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::{JsonFileStore, ProjectStore, StoreDocument};
