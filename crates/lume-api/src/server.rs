// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP server setup and lifecycle.

use std::io;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use lume_core::device::DeviceRegistry;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// The API server.
pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    /// Creates a new server over a loaded device registry.
    pub fn new(registry: Arc<DeviceRegistry>, config: ApiConfig) -> Self {
        Self {
            state: AppState::new(registry, config),
        }
    }

    /// Builds the router with all routes and middleware.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/v1/devices", get(handlers::list_devices))
            .route("/api/v1/devices/{device_id}", get(handlers::get_device))
            .route("/api/v1/compile", post(handlers::compile))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(self.state.config.request_timeout))
            .with_state(self.state.clone())
    }

    /// Runs the server until the process is stopped.
    pub async fn run(self) -> io::Result<()> {
        let addr = self.state.config.socket_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(
            address = %addr,
            devices = self.state.registry.len(),
            "API server listening"
        );
        axum::serve(listener, router).await
    }

    /// Runs the server until the shutdown future resolves.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.state.config.socket_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(
            address = %addr,
            devices = self.state.registry.len(),
            "API server listening"
        );
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
