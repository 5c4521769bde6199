//! Freelancer offer types.
//!
//! Offers are tracked alongside a project but have no representation in the
//! upstream tracking service; they exist only in the local store. Identifiers
//! are client-generated strings and upserts key on exact id match.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A freelancer engagement proposal.
///
/// The editable status vocabulary is draft/negotiation/submitted/won/lost;
/// statuses stay free-form strings so the aggregation rule (everything but a
/// case-insensitive "closed" counts as open) is preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Client-generated identifier, unique within its project.
    pub id: String,

    /// Freelancer display name.
    pub freelancer: String,

    /// Free-text status label.
    pub status: String,

    /// Response deadline.
    pub deadline: NaiveDate,

    /// Offered budget, non-negative.
    pub budget: f64,

    /// Attached documents. Stored and returned, never read by core logic.
    #[serde(default)]
    pub documents: Vec<OfferDocument>,

    /// Status history. Populated by clients, never read by core logic.
    #[serde(default)]
    pub history: Vec<OfferHistoryEntry>,
}

/// A document attached to an offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDocument {
    pub name: String,
    pub url: String,
}

/// One entry in an offer's status history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferHistoryEntry {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
