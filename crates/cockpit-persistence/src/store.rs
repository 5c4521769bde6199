//! Project store trait and the JSON-file implementation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cockpit_models::{Offer, Project, WorkItem, WorkItemPatch};

use crate::atomic::{atomic_write_json, read_json};
use crate::error::{PersistenceError, Result};

/// Keyed access to the locally stored projects.
///
/// Per-record mutations (work-item patch, offer upsert) live on the trait so
/// an implementation can make them atomic without callers changing.
pub trait ProjectStore: Send + Sync {
    /// Returns all stored projects in document order.
    fn list(&self) -> Result<Vec<Project>>;

    /// Looks up a project by id.
    fn get(&self, id: u64) -> Result<Option<Project>>;

    /// Replaces the project with the same id, or appends it.
    fn put(&self, project: Project) -> Result<()>;

    /// Shallow-merges a partial patch onto one work item and persists the
    /// result. Fails with NotFound when the project or item is absent.
    fn patch_work_item(
        &self,
        project_id: u64,
        work_item_id: u64,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem>;

    /// Replaces the offer with the same id in place (order preserved), or
    /// appends it. The offer is stored and returned unchanged.
    fn upsert_offer(&self, project_id: u64, offer: Offer) -> Result<Offer>;
}

/// The persisted document: all projects in one JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    pub projects: Vec<Project>,
}

/// Whole-document JSON file store.
///
/// Every operation reads the full document; every mutation rewrites it via
/// atomic rename. Last write wins between concurrent mutations.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given document path. The file is not
    /// touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<StoreDocument> {
        read_json(&self.path)
    }

    fn write_document(&self, document: &StoreDocument) -> Result<()> {
        atomic_write_json(&self.path, document)
    }
}

impl ProjectStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Project>> {
        Ok(self.read_document()?.projects)
    }

    fn get(&self, id: u64) -> Result<Option<Project>> {
        let document = self.read_document()?;
        Ok(document.projects.into_iter().find(|p| p.id == id))
    }

    fn put(&self, project: Project) -> Result<()> {
        let mut document = self.read_document()?;
        match document.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project,
            None => document.projects.push(project),
        }
        self.write_document(&document)
    }

    fn patch_work_item(
        &self,
        project_id: u64,
        work_item_id: u64,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem> {
        let mut document = self.read_document()?;
        let project = document
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| PersistenceError::not_found("project", project_id))?;

        let item = project
            .work_packages
            .iter_mut()
            .find(|item| item.id == work_item_id)
            .ok_or_else(|| PersistenceError::not_found("work package", work_item_id))?;

        item.apply_patch(patch);
        let updated = item.clone();

        debug!(project_id, work_item_id, "patched work item");
        self.write_document(&document)?;
        Ok(updated)
    }

    fn upsert_offer(&self, project_id: u64, offer: Offer) -> Result<Offer> {
        let mut document = self.read_document()?;
        let project = document
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| PersistenceError::not_found("project", project_id))?;

        match project.offers.iter_mut().find(|o| o.id == offer.id) {
            Some(existing) => *existing = offer.clone(),
            None => project.offers.push(offer.clone()),
        }

        debug!(project_id, offer_id = %offer.id, "upserted offer");
        self.write_document(&document)?;
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn offer(id: &str, status: &str) -> Offer {
        Offer {
            id: id.to_string(),
            freelancer: "Jo".to_string(),
            status: status.to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            budget: 900.0,
            documents: Vec::new(),
            history: Vec::new(),
        }
    }

    fn seeded_store(dir: &std::path::Path) -> JsonFileStore {
        let mut alpha = Project::new(1, "Alpha", "alpha");
        alpha.work_packages.push(WorkItem::new(10, "Kickoff"));
        alpha.offers.push(offer("1-a", "draft"));
        alpha.offers.push(offer("1-b", "submitted"));
        let beta = Project::new(2, "Beta", "beta");

        let path = dir.join("projects.json");
        atomic_write_json(
            &path,
            &StoreDocument {
                projects: vec![alpha, beta],
            },
        )
        .unwrap();
        JsonFileStore::new(path)
    }

    #[test]
    fn test_list_and_get() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let projects = store.list().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Alpha");

        assert_eq!(store.get(2).unwrap().unwrap().name, "Beta");
        assert!(store.get(99).unwrap().is_none());
    }

    #[test]
    fn test_put_replaces_or_appends() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let mut beta = store.get(2).unwrap().unwrap();
        beta.status = "active".to_string();
        store.put(beta).unwrap();
        assert_eq!(store.get(2).unwrap().unwrap().status, "active");

        store.put(Project::new(3, "Gamma", "gamma")).unwrap();
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn test_patch_work_item_merges_and_persists() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let patch = WorkItemPatch {
            priority: Some("High".to_string()),
            due_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            assignee: None,
        };
        let updated = store.patch_work_item(1, 10, &patch).unwrap();
        assert_eq!(updated.priority, "High");
        assert_eq!(updated.assignee, "Unassigned");

        // Survives a fresh read.
        let reloaded = store.get(1).unwrap().unwrap();
        assert_eq!(reloaded.work_packages[0].priority, "High");
    }

    #[test]
    fn test_patch_with_empty_body_returns_item_unchanged() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let before = store.get(1).unwrap().unwrap().work_packages[0].clone();
        let updated = store
            .patch_work_item(1, 10, &WorkItemPatch::default())
            .unwrap();
        assert_eq!(updated.subject, before.subject);
        assert_eq!(updated.priority, before.priority);
        assert_eq!(updated.due_date, before.due_date);
    }

    #[test]
    fn test_patch_missing_item_or_project() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let patch = WorkItemPatch::default();
        assert!(matches!(
            store.patch_work_item(1, 999, &patch),
            Err(PersistenceError::NotFound { kind: "work package", .. })
        ));
        assert!(matches!(
            store.patch_work_item(999, 10, &patch),
            Err(PersistenceError::NotFound { kind: "project", .. })
        ));
    }

    #[test]
    fn test_upsert_offer_replaces_in_place() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        let replacement = offer("1-a", "won");
        store.upsert_offer(1, replacement).unwrap();

        let offers = store.get(1).unwrap().unwrap().offers;
        assert_eq!(offers.len(), 2);
        // Replaced at its existing position, order preserved.
        assert_eq!(offers[0].id, "1-a");
        assert_eq!(offers[0].status, "won");
        assert_eq!(offers[1].id, "1-b");
    }

    #[test]
    fn test_upsert_offer_appends_new_id() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        store.upsert_offer(1, offer("1-c", "draft")).unwrap();
        let offers = store.get(1).unwrap().unwrap().offers;
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[2].id, "1-c");
    }

    #[test]
    fn test_upsert_offer_missing_project() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path());

        assert!(matches!(
            store.upsert_offer(42, offer("x", "draft")),
            Err(PersistenceError::NotFound { kind: "project", .. })
        ));
    }

    #[test]
    fn test_missing_document_is_read_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(matches!(
            store.list(),
            Err(PersistenceError::ReadError { .. })
        ));
    }
}
