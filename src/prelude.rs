// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use milestone_api::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, CorsConfig, MongoConfig};
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{AppState, create_router};

// Database
pub use crate::db::{Connector, Database, DbError, LazyConnection, MongoConnector, UserRecord};

// Metrics types
pub use crate::metrics::{AppInfoLabels, Endpoint, MetricsRegistry, RequestLabels};

// Startup
pub use crate::seed::{SeedOutcome, seed_default_user};
