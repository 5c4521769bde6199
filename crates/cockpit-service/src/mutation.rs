//! Mutation service: work-item patches and offer upserts.

use tracing::debug;

use cockpit_models::{Offer, WorkItem, WorkItemPatch};

use crate::backend::Backend;
use crate::error::Result;

/// Write-side access to projects, backed by either mode.
///
/// No partial-failure recovery: a store write that fails after the merge is
/// reported to the caller and nothing is rolled back.
pub struct MutationService {
    backend: Backend,
}

impl MutationService {
    /// Creates a mutation service over the given backend.
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Applies a partial patch to one work item and returns the result.
    /// Upstream mode forwards the patch verbatim; the project id only
    /// matters locally since the upstream endpoint is keyed by item id.
    pub async fn patch_work_item(
        &self,
        project_id: u64,
        work_item_id: u64,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem> {
        debug!(project_id, work_item_id, "patching work item");
        match &self.backend {
            Backend::Local(store) => Ok(store.patch_work_item(project_id, work_item_id, patch)?),
            Backend::Upstream(client) => {
                Ok(client.patch_work_package(work_item_id, patch).await?)
            }
        }
    }

    /// Stores an offer: replaces the offer with the same id in place, or
    /// appends it. Returns the stored offer.
    pub async fn upsert_offer(&self, project_id: u64, offer: Offer) -> Result<Offer> {
        debug!(project_id, offer_id = %offer.id, "upserting offer");
        match &self.backend {
            Backend::Local(store) => Ok(store.upsert_offer(project_id, offer)?),
            Backend::Upstream(client) => Ok(client.post_offer(project_id, &offer).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cockpit_models::{Project, WorkItem};
    use cockpit_persistence::{JsonFileStore, ProjectStore, StoreDocument};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::error::ServiceError;

    fn offer(id: &str, status: &str) -> Offer {
        Offer {
            id: id.to_string(),
            freelancer: "Jo".to_string(),
            status: status.to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            budget: 500.0,
            documents: Vec::new(),
            history: Vec::new(),
        }
    }

    fn local_service(dir: &std::path::Path) -> (MutationService, Arc<dyn ProjectStore>) {
        let mut alpha = Project::new(1, "Alpha", "alpha");
        alpha.work_packages.push(WorkItem::new(10, "Kickoff"));
        alpha.offers.push(offer("1-a", "draft"));
        alpha.offers.push(offer("1-b", "submitted"));

        let path = dir.join("projects.json");
        cockpit_persistence::atomic::atomic_write_json(
            &path,
            &StoreDocument {
                projects: vec![alpha],
            },
        )
        .unwrap();

        let store: Arc<dyn ProjectStore> = Arc::new(JsonFileStore::new(path));
        (MutationService::new(Backend::Local(store.clone())), store)
    }

    #[tokio::test]
    async fn test_patch_work_item_local() {
        let dir = tempdir().unwrap();
        let (service, store) = local_service(dir.path());

        let patch = WorkItemPatch {
            assignee: Some("Dana".to_string()),
            ..Default::default()
        };
        let updated = service.patch_work_item(1, 10, &patch).await.unwrap();
        assert_eq!(updated.assignee, "Dana");

        let reloaded = store.get(1).unwrap().unwrap();
        assert_eq!(reloaded.work_packages[0].assignee, "Dana");
    }

    #[tokio::test]
    async fn test_patch_missing_work_item_is_not_found() {
        let dir = tempdir().unwrap();
        let (service, _) = local_service(dir.path());

        let result = service
            .patch_work_item(1, 999, &WorkItemPatch::default())
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));

        let result = service
            .patch_work_item(999, 10, &WorkItemPatch::default())
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upsert_offer_replace_and_append() {
        let dir = tempdir().unwrap();
        let (service, store) = local_service(dir.path());

        // Same id: replaced in place.
        service.upsert_offer(1, offer("1-a", "won")).await.unwrap();
        // New id: appended.
        service.upsert_offer(1, offer("1-c", "draft")).await.unwrap();

        let offers = store.get(1).unwrap().unwrap().offers;
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0].status, "won");
        assert_eq!(offers[1].id, "1-b");
        assert_eq!(offers[2].id, "1-c");
    }

    #[tokio::test]
    async fn test_upsert_offer_returns_payload_unchanged() {
        let dir = tempdir().unwrap();
        let (service, _) = local_service(dir.path());

        let stored = service.upsert_offer(1, offer("1-z", "DRAFT")).await.unwrap();
        // No server-side normalization in local mode.
        assert_eq!(stored.status, "DRAFT");
    }
}
