//! Router configuration and server setup.

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/healthz", get(handlers::health))
        // Projects
        .route("/api/projects", get(handlers::list_projects))
        .route(
            "/api/projects/aggregate/summary",
            get(handlers::aggregate_summary),
        )
        .route("/api/projects/:id", get(handlers::get_project))
        // Mutations
        .route(
            "/api/projects/:project_id/work-packages/:work_package_id",
            patch(handlers::patch_work_package),
        )
        .route(
            "/api/projects/:project_id/offers",
            post(handlers::upsert_offer),
        )
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}
