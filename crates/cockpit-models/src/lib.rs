//! Core data models for the project cockpit.
//!
//! These types describe the normalized shape every backing mode (local JSON
//! store or upstream API) is reduced to: projects embedding work packages
//! and freelancer offers. Wire and store representations are camelCase.

pub mod casefold;
pub mod offer;
pub mod project;
pub mod target_types;
pub mod work_item;

pub use offer::{Offer, OfferDocument, OfferHistoryEntry};
pub use project::Project;
pub use target_types::TargetTypes;
pub use work_item::{WorkItem, WorkItemPatch};
