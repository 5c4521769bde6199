//! Project type for the cockpit.
//!
//! A project is the unit of selection in the cockpit: clients pick a subset
//! of projects and request aggregate metrics over them. Each project embeds
//! its own work packages and offers; identifiers come from the backing
//! source and are never generated here.

use serde::{Deserialize, Serialize};

use crate::offer::Offer;
use crate::work_item::WorkItem;

/// A tracked project with its embedded work packages and offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Source-assigned identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Short code used by the tracking service (e.g. "alpha").
    pub identifier: String,

    /// Lifecycle status label, lowercased on ingest ("active", "unknown", ...).
    pub status: String,

    /// Work packages embedded in this project, in source order.
    #[serde(default)]
    pub work_packages: Vec<WorkItem>,

    /// Freelancer offers tracked alongside the project. Always empty in
    /// upstream mode; the tracking service has no offer concept.
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl Project {
    /// Creates a summary project with no embedded collections.
    pub fn new(id: u64, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            identifier: identifier.into(),
            status: "unknown".to_string(),
            work_packages: Vec::new(),
            offers: Vec::new(),
        }
    }

    /// Finds a work package by id within this project.
    pub fn work_package(&self, id: u64) -> Option<&WorkItem> {
        self.work_packages.iter().find(|item| item.id == id)
    }
}
