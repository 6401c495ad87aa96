// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # lume-api
//!
//! HTTP surface for the LUME command compiler.
//!
//! The server exposes the compiler as a small JSON API:
//!
//! - `GET /health` - liveness and version
//! - `GET /api/v1/devices` - registered devices
//! - `GET /api/v1/devices/{device_id}` - one device
//! - `POST /api/v1/compile` - compile an ordered command batch
//!
//! Compilation is pure and the device registry is immutable after
//! startup, so the server carries no locks around request handling.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use response::{ApiResponse, DeviceSummary, ErrorResponse, HealthResponse};
pub use server::ApiServer;
pub use state::AppState;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
