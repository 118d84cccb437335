// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry shared by all handlers

mod init;
mod scrape;

use crate::metrics::labels::RequestLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Registry>,
    http_requests: Family<RequestLabels, Counter>,
    uptime_seconds: Gauge<f64, AtomicU64>,
    started_at: Instant,
}
