//! Project repository: resolves and normalizes project data.

use futures::future::try_join_all;
use tracing::debug;

use cockpit_metrics::{aggregate, AggregateMetrics};
use cockpit_models::{Project, TargetTypes};

use crate::backend::Backend;
use crate::error::{Result, ServiceError};

/// Read-side access to projects, backed by either mode.
pub struct ProjectRepository {
    backend: Backend,
    target_types: TargetTypes,
}

impl ProjectRepository {
    /// Creates a repository over the given backend and type vocabulary.
    pub fn new(backend: Backend, target_types: TargetTypes) -> Self {
        Self {
            backend,
            target_types,
        }
    }

    /// Lists projects. Local mode returns the stored documents as-is,
    /// embedded collections included; upstream mode returns summaries.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        match &self.backend {
            Backend::Local(store) => Ok(store.list()?),
            Backend::Upstream(client) => Ok(client.list_projects().await?),
        }
    }

    /// Returns one fully populated project, or NotFound.
    pub async fn project_details(&self, id: u64) -> Result<Project> {
        match &self.backend {
            Backend::Local(store) => store
                .get(id)?
                .ok_or_else(|| ServiceError::NotFound(format!("project not found: {id}"))),
            Backend::Upstream(client) => {
                Ok(client.project_details(id, &self.target_types).await?)
            }
        }
    }

    /// Computes aggregate metrics over the selected project ids.
    ///
    /// Local mode silently skips ids with no stored project; upstream mode
    /// fetches details concurrently and propagates the first failure.
    pub async fn aggregate(&self, ids: &[u64]) -> Result<AggregateMetrics> {
        let projects = match &self.backend {
            Backend::Local(store) => {
                let selected: Vec<Project> = store
                    .list()?
                    .into_iter()
                    .filter(|project| ids.contains(&project.id))
                    .collect();
                selected
            }
            Backend::Upstream(client) => {
                try_join_all(
                    ids.iter()
                        .map(|id| client.project_details(*id, &self.target_types)),
                )
                .await?
            }
        };

        debug!(selected = projects.len(), "computing aggregate");
        Ok(aggregate(&projects, &self.target_types))
    }
}
