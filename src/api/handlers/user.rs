use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::db::SEED_USER_ID;
use crate::metrics::Endpoint;

const NO_USER_FOUND: &str = "No User Found";

/// User endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
}

/// GET /user
///
/// Looks up the seed user. A missing record is a normal 200 response with
/// a sentinel name; only database failures produce a 500.
pub async fn get_user(State(state): State<Arc<AppState>>) -> Result<Json<UserResponse>, ApiError> {
    state.metrics.record_request(Endpoint::User);

    let lookup = async {
        let db = state.db.get().await?;
        db.find_user(SEED_USER_ID).await
    };

    match lookup.await {
        Ok(Some(user)) => Ok(Json(UserResponse {
            name: user.display_name().to_string(),
        })),
        Ok(None) => {
            tracing::debug!("User {} not found", SEED_USER_ID);
            Ok(Json(UserResponse {
                name: NO_USER_FOUND.to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            Err(ApiError::internal(format!("Error fetching user: {e}")))
        }
    }
}
