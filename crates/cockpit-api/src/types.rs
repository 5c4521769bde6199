//! Request and response DTOs.
//!
//! Domain types serialize directly as response bodies; only the handful of
//! shapes with no domain counterpart live here.

use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Query parameters for the aggregate summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateQuery {
    /// Comma-separated project ids; non-numeric entries are dropped.
    pub ids: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_seconds: 12,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptimeSeconds\":12"));
    }

    #[test]
    fn test_aggregate_query_defaults() {
        let query = AggregateQuery::default();
        assert!(query.ids.is_none());
    }
}
