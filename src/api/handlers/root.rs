use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::host;

/// Root endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub container_id: String,
    pub database: String,
}

/// GET /
///
/// Service banner. Does not touch the database and is not counted.
pub async fn root_info() -> Result<Json<RootResponse>, ApiError> {
    let container_id = host::container_id().map_err(|e| {
        tracing::error!("Error getting container ID: {}", e);
        ApiError::internal(format!("Error: {e}"))
    })?;

    Ok(Json(RootResponse {
        message: "Milestone 2 API is running".to_string(),
        status: "healthy".to_string(),
        container_id,
        database: "MongoDB".to_string(),
    }))
}
