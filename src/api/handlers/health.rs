use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::error::AppError;
use crate::host;
use crate::metrics::Endpoint;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub container_id: String,
}

/// GET /health
///
/// Liveness/readiness probe. Pings the database; every failure path ends
/// in a 503 so orchestrators can tell "process up, dependency down".
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.metrics.record_request(Endpoint::Health);

    match probe(&state).await {
        Ok(container_id) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            container_id,
        })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            Err(ApiError::unavailable(format!("Unhealthy: {e}")))
        }
    }
}

async fn probe(state: &AppState) -> Result<String, AppError> {
    let db = state.db.get().await?;
    db.ping().await?;
    host::container_id()
}
