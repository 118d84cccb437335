use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::host;
use crate::metrics::Endpoint;

/// Container endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ContainerResponse {
    pub container_id: String,
    pub message: String,
}

/// GET /container
///
/// Reports which replica served the request.
pub async fn get_container_id(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ContainerResponse>, ApiError> {
    state.metrics.record_request(Endpoint::Container);

    let container_id = host::container_id().map_err(|e| {
        tracing::error!("Error getting container ID: {}", e);
        ApiError::internal(format!("Error: {e}"))
    })?;

    Ok(Json(ContainerResponse {
        container_id,
        message: "Container ID retrieved successfully".to_string(),
    }))
}
