// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for Milestone API application
//!
//! Loads and parses configuration from environment variables.

use std::time::Duration;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8000";
    pub const MONGO_HOST: &str = "localhost";
    pub const MONGO_PORT: u16 = 27017;
    pub const MONGO_DB: &str = "milestone2";
    pub const MONGO_TIMEOUT_MS: u64 = 5000;
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const MONGO_HOST: &str = "MONGO_HOST";
    pub const MONGO_PORT: &str = "MONGO_PORT";
    pub const MONGO_DB: &str = "MONGO_DB";
    pub const MONGO_TIMEOUT_MS: &str = "MONGO_TIMEOUT_MS";
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Connection settings for the MongoDB instance backing the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    /// Connection string understood by the MongoDB driver
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            host: defaults::MONGO_HOST.to_string(),
            port: defaults::MONGO_PORT,
            database: defaults::MONGO_DB.to_string(),
            server_selection_timeout: Duration::from_millis(defaults::MONGO_TIMEOUT_MS),
        }
    }
}

/// Cross-origin policy applied to every route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin, method and header is allowed
    Permissive,
    /// Only the listed origins are allowed
    Origins(Vec<String>),
}

impl CorsConfig {
    /// Parses `*` or a comma-separated origin list
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsConfig::Permissive
        } else {
            CorsConfig::Origins(origins)
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub mongo: MongoConfig,
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            mongo: MongoConfig::default(),
            cors: CorsConfig::Permissive,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let host = lookup(env_vars::MONGO_HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| defaults::MONGO_HOST.to_string());

        let port = match lookup(env_vars::MONGO_PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid {} '{}': {}. Using {}.",
                    env_vars::MONGO_PORT,
                    raw,
                    e,
                    defaults::MONGO_PORT
                );
                defaults::MONGO_PORT
            }),
            None => defaults::MONGO_PORT,
        };

        let database =
            lookup(env_vars::MONGO_DB).unwrap_or_else(|| defaults::MONGO_DB.to_string());

        let timeout_ms = lookup(env_vars::MONGO_TIMEOUT_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults::MONGO_TIMEOUT_MS);

        let cors = CorsConfig::parse(
            &lookup(env_vars::CORS_ALLOWED_ORIGINS)
                .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_string()),
        );

        Config {
            server_addr,
            mongo: MongoConfig {
                host,
                port,
                database,
                server_selection_timeout: Duration::from_millis(timeout_ms),
            },
            cors,
        }
    }
}
