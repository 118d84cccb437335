// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Milestone API
//!
//! Small informational HTTP service backed by MongoDB.
//!
//! The service answers user lookups, reports which container served a
//! request, exposes a health probe for orchestrators and counts requests
//! in Prometheus text format.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `db`: lazily connected document store
//! - `error`: error types
//! - `host`: container identity
//! - `metrics`: request counters and registry
//! - `seed`: startup seeding
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod db;
mod error;
mod host;
mod metrics;
mod seed;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, CorsConfig, MongoConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and error body
pub use api::{AppState, ErrorBody, create_router};

/// Database seam and the MongoDB implementation
pub use db::{
    Connector, Database, DbError, LazyConnection, MongoConnector, SEED_USER_ID, SEED_USER_NAME,
    UserRecord,
};

/// Container identity lookup
pub use host::container_id;

/// Metrics registry and labels
pub use metrics::{Endpoint, MetricsRegistry};

/// Startup seeding
pub use seed::{SeedOutcome, seed_default_user};
