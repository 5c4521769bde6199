//! Client for the upstream project-tracking service.
//!
//! The upstream API returns HAL-flavored JSON (`_embedded.elements`
//! collections, embedded named resources). This crate owns the wire shapes
//! and their normalization into the cockpit's domain model; nothing outside
//! it sees upstream JSON. Requests are never retried and use the client's
//! default timeouts.

pub mod client;
pub mod error;
pub mod shapes;

pub use client::UpstreamClient;
pub use error::{Result, UpstreamError};
