//! Application state shared across handlers.

use std::sync::Arc;

use cockpit_service::{MutationService, ProjectRepository};

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Read-side project access.
    pub repository: Arc<ProjectRepository>,
    /// Write-side project access.
    pub mutations: Arc<MutationService>,
}

impl AppState {
    /// Creates the state from its components.
    pub fn new(
        config: ApiConfig,
        repository: ProjectRepository,
        mutations: MutationService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
            mutations: Arc::new(mutations),
        }
    }
}
