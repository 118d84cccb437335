// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request counters and process metrics
//!
//! Contains label types and the Prometheus metrics registry.

mod labels;
mod registry;


/// Labels for request counters and application info
pub use labels::{AppInfoLabels, Endpoint, RequestLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
