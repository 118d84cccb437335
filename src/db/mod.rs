// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Document database access
//!
//! Handlers never talk to MongoDB directly. They go through [`LazyConnection`],
//! which hands out a shared [`Database`] handle built by a [`Connector`].

mod lazy;
mod mongo;
mod types;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use lazy::LazyConnection;
pub use mongo::MongoConnector;
pub use types::{SEED_USER_ID, SEED_USER_NAME, UserRecord};

/// Database failure kinds
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DbError {
    /// Server unreachable or liveness probe failed
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Operation failed on an established connection
    #[error("Database query error: {0}")]
    Query(String),
}

/// Operations the service performs against the user store
#[async_trait]
pub trait Database: Send + Sync {
    /// Liveness probe
    async fn ping(&self) -> Result<(), DbError>;

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, DbError>;

    async fn count_users(&self) -> Result<u64, DbError>;

    async fn insert_user(&self, user: &UserRecord) -> Result<(), DbError>;

    /// Releases the underlying client
    async fn shutdown(&self);
}

/// Builds a fresh, probed [`Database`] handle
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn Database>, DbError>;
}
