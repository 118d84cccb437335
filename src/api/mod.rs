//! HTTP API module for Milestone API
//!
//! # Endpoints
//! - `GET /` — service banner
//! - `GET /user` — seed user lookup
//! - `GET /container` — replica identity
//! - `GET /health` — liveness/readiness probe
//! - `GET /metrics` — Prometheus metrics

mod error;
pub mod handlers;
mod state;

use axum::{Router, http::HeaderValue, routing::get};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(handlers::root_info))
        .route("/user", get(handlers::get_user))
        .route("/container", get(handlers::get_container_id))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match config {
        CorsConfig::Permissive => AllowOrigin::any(),
        CorsConfig::Origins(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
