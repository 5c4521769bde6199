//! Project read handlers: listing, detail, aggregate summary.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use cockpit_metrics::AggregateMetrics;
use cockpit_models::Project;

use crate::error::Result;
use crate::state::AppState;
use crate::types::AggregateQuery;

/// GET /api/projects - List all projects.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>> {
    let projects = state.repository.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/:id - Get a populated project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Project>> {
    let project = state.repository.project_details(id).await?;
    Ok(Json(project))
}

/// GET /api/projects/aggregate/summary?ids=1,2,3 - Aggregate metrics over
/// the selected projects.
pub async fn aggregate_summary(
    State(state): State<AppState>,
    Query(query): Query<AggregateQuery>,
) -> Result<Json<AggregateMetrics>> {
    let ids = parse_ids(query.ids.as_deref().unwrap_or(""));
    let metrics = state.repository.aggregate(&ids).await?;
    Ok(Json(metrics))
}

/// Parses a comma-separated id list, silently dropping non-numeric entries.
fn parse_ids(input: &str) -> Vec<u64> {
    input
        .split(',')
        .filter_map(|entry| entry.trim().parse::<u64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids("1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse_ids(" 1 , 2 "), vec![1, 2]);
        assert_eq!(parse_ids("1,abc,3"), vec![1, 3]);
        assert_eq!(parse_ids(""), Vec::<u64>::new());
        assert_eq!(parse_ids("abc"), Vec::<u64>::new());
    }
}
