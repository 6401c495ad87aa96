// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Shared application state for the API server.

use std::sync::Arc;

use lume_core::device::DeviceRegistry;

use crate::config::ApiConfig;

/// Shared state handed to every handler.
///
/// The registry is read-only after construction, so handlers compile
/// commands concurrently without coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The device registry, built once at startup.
    pub registry: Arc<DeviceRegistry>,

    /// Server configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(registry: Arc<DeviceRegistry>, config: ApiConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheap_to_clone() {
        let state = AppState::new(Arc::new(DeviceRegistry::new()), ApiConfig::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.registry, &clone.registry));
    }
}
