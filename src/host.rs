// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Container identity

use crate::error::{AppError, Result};

/// Host name of the running process, which is the pod name under Kubernetes
pub fn container_id() -> Result<String> {
    let raw = gethostname::gethostname();
    let name = raw
        .into_string()
        .map_err(|raw| AppError::Hostname(format!("hostname {raw:?} is not valid UTF-8")))?;
    if name.is_empty() {
        return Err(AppError::Hostname("hostname is empty".to_string()));
    }
    Ok(name)
}
