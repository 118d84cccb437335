// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! MongoDB-backed implementation of the database traits

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::sync::Arc;

use super::{Connector, Database, DbError, UserRecord};
use crate::config::MongoConfig;

const USERS_COLLECTION: &str = "users";

/// Connects to the MongoDB server described by [`MongoConfig`]
pub struct MongoConnector {
    config: MongoConfig,
}

impl MongoConnector {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    async fn connect(&self) -> Result<Arc<dyn Database>, DbError> {
        let uri = self.config.uri();
        tracing::debug!("Connecting to MongoDB at {}", uri);

        let mut options = ClientOptions::parse(uri.as_str())
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;
        options.server_selection_timeout = Some(self.config.server_selection_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client =
            Client::with_options(options).map_err(|e| DbError::Connection(e.to_string()))?;

        // The driver connects lazily; force a round trip so failures surface here
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        tracing::info!("Connected to MongoDB at {}", uri);

        let db = client.database(&self.config.database);
        Ok(Arc::new(MongoDatabase {
            users: db.collection(USERS_COLLECTION),
            db,
            client,
        }))
    }
}

struct MongoDatabase {
    client: Client,
    db: mongodb::Database,
    users: Collection<UserRecord>,
}

#[async_trait]
impl Database for MongoDatabase {
    async fn ping(&self) -> Result<(), DbError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| DbError::Connection(e.to_string()))
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, DbError> {
        self.users
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn count_users(&self) -> Result<u64, DbError> {
        self.users
            .count_documents(doc! {})
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn insert_user(&self, user: &UserRecord) -> Result<(), DbError> {
        self.users
            .insert_one(user)
            .await
            .map(|_| ())
            .map_err(|e| DbError::Query(e.to_string()))
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
