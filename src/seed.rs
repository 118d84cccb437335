// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Startup seeding of the bootstrap user

use crate::db::{LazyConnection, UserRecord};
use crate::error::{AppError, Result};

/// What the seeding step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    AlreadyPresent,
}

/// Inserts the seed user if the `users` collection is empty
///
/// This is a count-then-insert, not a uniqueness constraint: two replicas
/// starting against the same empty store at the same time can both insert.
pub async fn seed_default_user(db: &LazyConnection) -> Result<SeedOutcome> {
    let handle = db.get().await.map_err(|e| AppError::Seed(e.to_string()))?;

    let existing = handle
        .count_users()
        .await
        .map_err(|e| AppError::Seed(e.to_string()))?;
    if existing > 0 {
        tracing::debug!("Users collection holds {} record(s), skipping seed", existing);
        return Ok(SeedOutcome::AlreadyPresent);
    }

    handle
        .insert_user(&UserRecord::seed())
        .await
        .map_err(|e| AppError::Seed(e.to_string()))?;
    tracing::info!("Initial user created");
    Ok(SeedOutcome::Inserted)
}
