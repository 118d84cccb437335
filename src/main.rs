// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use milestone_api::{
    AppState, Config, LazyConnection, MetricsRegistry, MongoConnector, Result, SeedOutcome,
    container_id, create_router, seed_default_user,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    tracing::info!(
        "MongoDB target {} (database '{}', timeout {:?})",
        config.mongo.uri(),
        config.mongo.database,
        config.mongo.server_selection_timeout
    );
    tracing::info!("CORS policy: {:?}", config.cors);

    let host = container_id().unwrap_or_else(|e| {
        tracing::warn!("Could not resolve container ID: {}", e);
        "unknown".to_string()
    });
    let metrics = MetricsRegistry::new(env!("CARGO_PKG_VERSION"), &host);
    let db = LazyConnection::new(MongoConnector::new(config.mongo.clone()));

    let state = Arc::new(AppState {
        config: config.clone(),
        metrics,
        db,
    });

    // A database that is down at boot must not keep the service from starting;
    // handlers retry the connection on each request.
    match seed_default_user(&state.db).await {
        Ok(SeedOutcome::Inserted) => tracing::info!("Seeded users collection"),
        Ok(SeedOutcome::AlreadyPresent) => tracing::debug!("Users collection already seeded"),
        Err(e) => tracing::warn!("Startup seeding skipped: {}", e),
    }
    tracing::info!("Application startup complete");

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let app = create_router(state.clone());

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Milestone API starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /          - Service info");
    tracing::info!("  - GET /user      - User lookup");
    tracing::info!("  - GET /container - Container ID");
    tracing::info!("  - GET /health    - Health check");
    tracing::info!("  - GET /metrics   - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    state.db.close().await;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; otherwise default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
