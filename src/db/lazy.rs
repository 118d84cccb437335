// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Lazily initialized, shared database handle

use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Connector, Database, DbError};

type ConnectAttempt = Shared<BoxFuture<'static, Result<Arc<dyn Database>, DbError>>>;

enum Slot {
    Empty,
    Connecting(ConnectAttempt),
    Ready(Arc<dyn Database>),
}

/// Holds at most one database handle, created on first use
///
/// Callers arriving while a connect attempt is in flight await that same
/// attempt and share its outcome, so there is never more than one attempt
/// at a time and none of them waits longer than one attempt. A failed
/// attempt leaves the slot empty and the next caller retries.
pub struct LazyConnection {
    connector: Arc<dyn Connector>,
    slot: Mutex<Slot>,
}

impl LazyConnection {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Arc::new(connector),
            slot: Mutex::new(Slot::Empty),
        }
    }

    /// Returns the shared handle, connecting if none is held yet
    pub async fn get(&self) -> Result<Arc<dyn Database>, DbError> {
        let attempt = {
            let mut slot = self.slot.lock().await;
            match &*slot {
                Slot::Ready(db) => {
                    tracing::trace!("Reusing established database connection");
                    return Ok(db.clone());
                }
                Slot::Connecting(attempt) => {
                    tracing::trace!("Joining in-flight database connect attempt");
                    attempt.clone()
                }
                Slot::Empty => {
                    tracing::debug!("No database connection yet, connecting");
                    let connector = self.connector.clone();
                    let attempt = async move { connector.connect().await }.boxed().shared();
                    *slot = Slot::Connecting(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;

        // Only the first waiter to resolve this attempt settles the slot
        let mut slot = self.slot.lock().await;
        if matches!(&*slot, Slot::Connecting(current) if current.ptr_eq(&attempt)) {
            *slot = match &result {
                Ok(db) => Slot::Ready(db.clone()),
                Err(e) => {
                    tracing::warn!("Failed to connect to database: {}", e);
                    Slot::Empty
                }
            };
        }
        result
    }

    pub async fn is_connected(&self) -> bool {
        matches!(&*self.slot.lock().await, Slot::Ready(_))
    }

    /// Drops the held handle after shutting it down
    pub async fn close(&self) {
        let held = std::mem::replace(&mut *self.slot.lock().await, Slot::Empty);
        if let Slot::Ready(db) = held {
            db.shutdown().await;
            tracing::info!("Database connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::UserRecord;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct NullDatabase {
        shut_down: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Database for NullDatabase {
        async fn ping(&self) -> Result<(), DbError> {
            Ok(())
        }

        async fn find_user(&self, _user_id: i64) -> Result<Option<UserRecord>, DbError> {
            Ok(None)
        }

        async fn count_users(&self) -> Result<u64, DbError> {
            Ok(0)
        }

        async fn insert_user(&self, _user: &UserRecord) -> Result<(), DbError> {
            Ok(())
        }

        async fn shutdown(&self) {
            self.shut_down.store(true, Ordering::SeqCst);
        }
    }

    /// Fails the first `failures` attempts, then succeeds
    struct CountingConnector {
        attempts: Arc<AtomicUsize>,
        failures: usize,
        delay: Duration,
        shut_down: Arc<AtomicBool>,
    }

    impl CountingConnector {
        fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
            let attempts = Arc::new(AtomicUsize::new(0));
            let connector = Self {
                attempts: attempts.clone(),
                failures,
                delay: Duration::ZERO,
                shut_down: Arc::new(AtomicBool::new(false)),
            };
            (connector, attempts)
        }
    }

    #[async_trait]
    impl Connector for CountingConnector {
        async fn connect(&self) -> Result<Arc<dyn Database>, DbError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if attempt < self.failures {
                return Err(DbError::Connection("connection refused".to_string()));
            }
            Ok(Arc::new(NullDatabase {
                shut_down: self.shut_down.clone(),
            }))
        }
    }

    #[tokio::test]
    async fn test_connects_once_and_reuses() {
        let (connector, attempts) = CountingConnector::new(0);
        let lazy = LazyConnection::new(connector);

        assert!(!lazy.is_connected().await);
        let first = lazy.get().await.unwrap();
        let second = lazy.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(lazy.is_connected().await);
    }

    #[tokio::test]
    async fn test_failed_attempt_is_not_cached() {
        let (connector, attempts) = CountingConnector::new(1);
        let lazy = LazyConnection::new(connector);

        let err = lazy.get().await.err().unwrap();
        assert!(matches!(err, DbError::Connection(_)));
        assert!(!lazy.is_connected().await);

        assert!(lazy.get().await.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_cold_start_connects_once() {
        let (mut connector, attempts) = CountingConnector::new(0);
        connector.delay = Duration::from_millis(50);
        let lazy = Arc::new(LazyConnection::new(connector));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let lazy = lazy.clone();
                tokio::spawn(async move { lazy.get().await.is_ok() })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap());
        }
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_failed_attempt() {
        let (mut connector, attempts) = CountingConnector::new(usize::MAX);
        connector.delay = Duration::from_millis(200);
        let lazy = Arc::new(LazyConnection::new(connector));

        let started = tokio::time::Instant::now();
        let tasks: Vec<_> = (0..12)
            .map(|_| {
                let lazy = lazy.clone();
                tokio::spawn(async move { lazy.get().await.err() })
            })
            .collect();

        for task in tasks {
            let err = task.await.unwrap();
            assert!(matches!(err, Some(DbError::Connection(_))));
        }
        let elapsed = started.elapsed();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(
            elapsed < Duration::from_millis(800),
            "callers waited {elapsed:?} for a 200ms attempt"
        );
        assert!(!lazy.is_connected().await);

        // The failure is not cached
        assert!(lazy.get().await.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_close_releases_handle() {
        let (connector, attempts) = CountingConnector::new(0);
        let shut_down = connector.shut_down.clone();
        let lazy = LazyConnection::new(connector);

        lazy.get().await.unwrap();
        lazy.close().await;

        assert!(shut_down.load(Ordering::SeqCst));
        assert!(!lazy.is_connected().await);

        // A later request reconnects from scratch
        lazy.get().await.unwrap();
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_close_without_connection_is_noop() {
        let (connector, attempts) = CountingConnector::new(0);
        let lazy = LazyConnection::new(connector);
        lazy.close().await;
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }
}
