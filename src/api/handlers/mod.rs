// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod container;
mod health;
mod metrics;
mod root;
mod user;

pub use container::get_container_id;
pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::root_info;
pub use user::get_user;
