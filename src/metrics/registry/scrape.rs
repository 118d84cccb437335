// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request bookkeeping and text exposition

use crate::error::Result;
use crate::metrics::labels::{Endpoint, RequestLabels};
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Refreshes the uptime gauge and renders the registry
    pub fn encode_metrics(&self) -> Result<String> {
        self.uptime_seconds.set(self.uptime_seconds());
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }

    pub fn record_request(&self, endpoint: Endpoint) {
        self.http_requests
            .get_or_create(&RequestLabels::from(endpoint))
            .inc();
    }

    pub fn request_count(&self, endpoint: Endpoint) -> u64 {
        self.http_requests
            .get_or_create(&RequestLabels::from(endpoint))
            .get()
    }

    /// Seconds since the registry was created, from a monotonic clock
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
