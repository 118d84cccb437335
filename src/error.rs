// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for Milestone API application

use thiserror::Error;

use crate::db::DbError;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Database connection or query error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Startup seeding failed
    #[error("Seed error: {0}")]
    Seed(String),

    /// Host identifier could not be resolved
    #[error("Hostname error: {0}")]
    Hostname(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
