//! Project repository and mutation service.
//!
//! Both services operate over an explicit [`Backend`] — the local document
//! store or the upstream API client — fixed at construction time. Handlers
//! never know which mode is active; everything they see is the normalized
//! domain model.

pub mod backend;
pub mod error;
pub mod mutation;
pub mod repository;

pub use backend::Backend;
pub use error::{Result, ServiceError};
pub use mutation::MutationService;
pub use repository::ProjectRepository;
