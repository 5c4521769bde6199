//! Upstream wire shapes and their normalization.
//!
//! The tracking service embeds related resources under `_embedded` and is
//! inconsistent about the project status field: the list endpoint returns a
//! plain string, the detail endpoint an object with a `name`. Normalization
//! flattens both into the domain model with the documented defaults.

use chrono::NaiveDate;
use serde::Deserialize;

use cockpit_models::casefold::fold;
use cockpit_models::work_item::{NORMAL_PRIORITY, UNASSIGNED, UNKNOWN};
use cockpit_models::{Project, WorkItem};

/// HAL collection wrapper: `{ "_embedded": { "elements": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct HalCollection<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Option<HalElements<T>>,
}

#[derive(Debug, Deserialize)]
pub struct HalElements<T> {
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,
}

impl<T> HalCollection<T> {
    /// Unwraps the element list; a missing `_embedded` means an empty one.
    pub fn into_elements(self) -> Vec<T> {
        self.embedded.map(|e| e.elements).unwrap_or_default()
    }
}

/// A project resource from either the list or the detail endpoint.
#[derive(Debug, Deserialize)]
pub struct HalProject {
    pub id: u64,
    pub name: String,
    pub identifier: String,
    /// Plain string on the list endpoint, `{ "name": ... }` on detail.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

impl HalProject {
    /// Normalizes into a project summary (no embedded collections).
    pub fn into_project(self) -> Project {
        let mut project = Project::new(self.id, self.name, self.identifier);
        project.status = status_label(self.status.as_ref());
        project
    }
}

/// A work package resource with its embedded named fields.
#[derive(Debug, Deserialize)]
pub struct HalWorkPackage {
    pub id: u64,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<HalWorkPackageEmbedded>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HalWorkPackageEmbedded {
    #[serde(rename = "type")]
    pub kind: Option<HalNamed>,
    pub status: Option<HalNamed>,
    pub assignee: Option<HalNamed>,
    pub priority: Option<HalNamed>,
}

/// An embedded resource of which only the display name matters.
#[derive(Debug, Deserialize)]
pub struct HalNamed {
    pub name: String,
}

impl HalWorkPackage {
    /// Normalizes into a domain work item, applying the documented defaults
    /// for absent embedded fields.
    pub fn into_work_item(self) -> WorkItem {
        let embedded = self.embedded.unwrap_or_default();
        WorkItem {
            id: self.id,
            subject: self.subject,
            kind: named_or(embedded.kind, UNKNOWN),
            status: named_or(embedded.status, UNKNOWN),
            assignee: named_or(embedded.assignee, UNASSIGNED),
            due_date: self.due_date,
            priority: named_or(embedded.priority, NORMAL_PRIORITY),
        }
    }
}

fn named_or(named: Option<HalNamed>, fallback: &str) -> String {
    named.map(|n| n.name).unwrap_or_else(|| fallback.to_string())
}

/// Lowercased status label from either upstream representation.
fn status_label(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => fold(s),
        Some(serde_json::Value::Object(map)) => map
            .get("name")
            .and_then(|name| name.as_str())
            .map(fold)
            .unwrap_or_else(|| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_into_elements() {
        let json = r#"{"_embedded": {"elements": [{"id": 1, "name": "A", "identifier": "a"}]}}"#;
        let collection: HalCollection<HalProject> = serde_json::from_str(json).unwrap();
        assert_eq!(collection.into_elements().len(), 1);
    }

    #[test]
    fn test_collection_missing_embedded_is_empty() {
        let collection: HalCollection<HalProject> = serde_json::from_str("{}").unwrap();
        assert!(collection.into_elements().is_empty());
    }

    #[test]
    fn test_project_status_string_form() {
        let json = r#"{"id": 3, "name": "Alpha", "identifier": "alpha", "status": "Active"}"#;
        let project: HalProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.into_project().status, "active");
    }

    #[test]
    fn test_project_status_object_form() {
        let json =
            r#"{"id": 3, "name": "Alpha", "identifier": "alpha", "status": {"name": "On Track"}}"#;
        let project: HalProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.into_project().status, "on track");
    }

    #[test]
    fn test_project_status_absent() {
        let json = r#"{"id": 3, "name": "Alpha", "identifier": "alpha"}"#;
        let project: HalProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.into_project().status, "unknown");
    }

    #[test]
    fn test_work_package_full() {
        let json = r#"{
            "id": 42,
            "subject": "Launch",
            "dueDate": "2026-05-01",
            "_embedded": {
                "type": {"name": "Milestone"},
                "status": {"name": "In progress"},
                "assignee": {"name": "Dana"},
                "priority": {"name": "High"}
            }
        }"#;
        let wp: HalWorkPackage = serde_json::from_str(json).unwrap();
        let item = wp.into_work_item();
        assert_eq!(item.kind, "Milestone");
        assert_eq!(item.status, "In progress");
        assert_eq!(item.assignee, "Dana");
        assert_eq!(item.priority, "High");
        assert_eq!(
            item.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
        );
    }

    #[test]
    fn test_work_package_defaults() {
        let json = r#"{"id": 42, "subject": "Launch"}"#;
        let wp: HalWorkPackage = serde_json::from_str(json).unwrap();
        let item = wp.into_work_item();
        assert_eq!(item.kind, "Unknown");
        assert_eq!(item.status, "Unknown");
        assert_eq!(item.assignee, "Unassigned");
        assert_eq!(item.priority, "Normal");
        assert!(item.due_date.is_none());
    }
}
