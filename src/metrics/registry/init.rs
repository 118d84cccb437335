// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::{AppInfoLabels, Endpoint, RequestLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new(version: &str, container_id: &str) -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests",
            http_requests.clone(),
        );
        // Every tracked endpoint is exported from the first scrape, even at zero
        for endpoint in Endpoint::ALL {
            let _ = http_requests.get_or_create(&RequestLabels::from(endpoint));
        }

        let uptime_seconds = Gauge::<f64, AtomicU64>::default();
        registry.register(
            "app_uptime_seconds",
            "Application uptime in seconds",
            uptime_seconds.clone(),
        );

        let app_info = Family::<AppInfoLabels, Gauge>::default();
        registry.register("app_info", "Application information", app_info.clone());
        app_info
            .get_or_create(&AppInfoLabels {
                version: version.to_string(),
                container_id: container_id.to_string(),
            })
            .set(1);

        Self {
            registry: Arc::new(registry),
            http_requests,
            uptime_seconds,
            started_at: Instant::now(),
        }
    }
}
