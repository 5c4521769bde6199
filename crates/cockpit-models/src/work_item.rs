//! Work item types.
//!
//! Work items ("work packages" on the wire) are the trackable units of
//! project work: milestones, deliverables, goals. Type, status and priority
//! are free-text labels classified case-insensitively; the cockpit only
//! patches due date, priority and assignee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default type/status label when the source omits the field.
pub const UNKNOWN: &str = "Unknown";
/// Default assignee label.
pub const UNASSIGNED: &str = "Unassigned";
/// Default priority label.
pub const NORMAL_PRIORITY: &str = "Normal";

/// A trackable unit of project work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Identifier, unique within its project (not across projects).
    pub id: u64,

    /// Subject line.
    pub subject: String,

    /// Free-text category label ("Milestone", "Deliverable", ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Free-text status; "closed"/"done" (any case) count as complete.
    pub status: String,

    /// Assignee display name.
    pub assignee: String,

    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Free-text priority ("low"/"normal"/"high").
    pub priority: String,
}

impl WorkItem {
    /// Creates a work item with source defaults for the optional labels.
    pub fn new(id: u64, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            kind: UNKNOWN.to_string(),
            status: UNKNOWN.to_string(),
            assignee: UNASSIGNED.to_string(),
            due_date: None,
            priority: NORMAL_PRIORITY.to_string(),
        }
    }

    /// Shallow-merges a partial patch onto this item. Absent fields are
    /// left unchanged; an empty patch is a no-op.
    pub fn apply_patch(&mut self, patch: &WorkItemPatch) {
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(priority) = &patch.priority {
            self.priority = priority.clone();
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee = assignee.clone();
        }
    }
}

/// Partial update for a work item. Only due date, priority and assignee
/// are patchable; everything else is owned by the tracking source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkItemPatch {
    /// New due date, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// New priority label, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// New assignee, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl WorkItemPatch {
    /// Whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.due_date.is_none() && self.priority.is_none() && self.assignee.is_none()
    }
}
