//! Mutation handlers: work-package patches and offer upserts.

use axum::{
    extract::{Path, State},
    Json,
};

use cockpit_models::{Offer, WorkItem, WorkItemPatch};

use crate::error::Result;
use crate::state::AppState;

/// PATCH /api/projects/:project_id/work-packages/:work_package_id - Apply a
/// partial update to one work package.
pub async fn patch_work_package(
    State(state): State<AppState>,
    Path((project_id, work_package_id)): Path<(u64, u64)>,
    Json(patch): Json<WorkItemPatch>,
) -> Result<Json<WorkItem>> {
    let updated = state
        .mutations
        .patch_work_item(project_id, work_package_id, &patch)
        .await?;
    Ok(Json(updated))
}

/// POST /api/projects/:project_id/offers - Upsert an offer.
pub async fn upsert_offer(
    State(state): State<AppState>,
    Path(project_id): Path<u64>,
    Json(offer): Json<Offer>,
) -> Result<Json<Offer>> {
    let stored = state.mutations.upsert_offer(project_id, offer).await?;
    Ok(Json(stored))
}
