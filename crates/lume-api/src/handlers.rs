// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP request handlers.
//!
//! The compile endpoint is the dispatcher boundary: it receives an
//! ordered batch of command documents, invokes the compiler once per
//! command preserving input order, and returns the compiled batches. A
//! single failing command fails the whole inbound batch; no partial
//! output is returned.

use axum::extract::{Path, State};
use axum::Json;
use tracing::{info, warn};

use lume_compiler::{compile_batch, Command};
use lume_core::instruction::CompiledBatch;

use crate::error::{ApiError, ApiResult};
use crate::response::{ApiResponse, DeviceSummary, HealthResponse};
use crate::state::AppState;

// =============================================================================
// Health
// =============================================================================

/// `GET /health` - liveness check.
pub async fn health() -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse::healthy())
}

// =============================================================================
// Devices
// =============================================================================

/// `GET /api/v1/devices` - lists all registered devices.
pub async fn list_devices(State(state): State<AppState>) -> ApiResponse<Vec<DeviceSummary>> {
    let devices: Vec<DeviceSummary> = state.registry.iter().map(DeviceSummary::from).collect();
    ApiResponse::success(devices)
}

/// `GET /api/v1/devices/{device_id}` - returns one device.
pub async fn get_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> ApiResult<ApiResponse<DeviceSummary>> {
    let device = state
        .registry
        .get(&device_id)
        .ok_or_else(|| ApiError::not_found(format!("device '{device_id}' is not registered")))?;
    Ok(ApiResponse::success(DeviceSummary::from(device)))
}

// =============================================================================
// Compile
// =============================================================================

/// `POST /api/v1/compile` - compiles an ordered batch of commands.
pub async fn compile(
    State(state): State<AppState>,
    Json(commands): Json<Vec<Command>>,
) -> ApiResult<ApiResponse<Vec<CompiledBatch>>> {
    if commands.is_empty() {
        return Err(ApiError::bad_request("command batch is empty"));
    }

    let batches = compile_batch(&state.registry, &commands).map_err(|e| {
        warn!(error = %e, commands = commands.len(), "batch compilation failed");
        ApiError::from(e)
    })?;

    info!(
        commands = commands.len(),
        instructions = batches.iter().map(CompiledBatch::len).sum::<usize>(),
        "batch compiled"
    );
    Ok(ApiResponse::success(batches))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lume_core::device::{Device, DeviceRegistry, RegisterMap};
    use lume_core::protocol::Register;

    use crate::config::ApiConfig;

    fn test_state() -> AppState {
        let device = Device {
            id: "strip-a".to_string(),
            location: "ttyUSB0".to_string(),
            slave: 128,
            mmap_id: "ws2812_v1".to_string(),
            strip_size: 2,
            registers: RegisterMap::from_iter([
                (Register::Brightness, 0),
                (Register::PaletteId, 1),
                (Register::Rgb, 2),
                (Register::Flags, 3),
            ]),
        };
        let registry = DeviceRegistry::from_devices(vec![device]).unwrap();
        AppState::new(Arc::new(registry), ApiConfig::default())
    }

    fn solid_rgb_command() -> Command {
        Command {
            id: Some("strip-a".to_string()),
            mode: Some("solid_rgb".to_string()),
            brightness: Some(10),
            palette_id: Some(1),
            rgb: Some(vec![1, 2, 3]),
            ..Command::default()
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = health().await;
        assert!(response.success);
        assert_eq!(response.data.unwrap().status, "ok");
    }

    #[tokio::test]
    async fn test_list_devices() {
        let response = list_devices(State(test_state())).await;
        let devices = response.data.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "strip-a");
        assert_eq!(devices[0].service, "modbus_master_/ttyUSB0");
    }

    #[tokio::test]
    async fn test_get_device_not_found() {
        let err = get_device(State(test_state()), Path("strip-z".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_compile_batch_endpoint() {
        let response = compile(State(test_state()), Json(vec![solid_rgb_command()]))
            .await
            .unwrap();
        let batches = response.data.unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].payload.len(), 4);
    }

    #[tokio::test]
    async fn test_compile_empty_batch_rejected() {
        let err = compile(State(test_state()), Json(vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_compile_unknown_device_fails_batch() {
        let mut bad = solid_rgb_command();
        bad.id = Some("strip-z".to_string());
        let err = compile(State(test_state()), Json(vec![solid_rgb_command(), bad]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_DEVICE");
    }
}
