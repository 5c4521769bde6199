//! API request handlers.

pub mod health;
pub mod mutations;
pub mod projects;

pub use health::*;
pub use mutations::*;
pub use projects::*;
