// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # API Integration Tests
//!
//! Integration tests for the HTTP surface, invoking handlers directly:
//!
//! - Health and device listing
//! - Compile endpoint behavior and error mapping
//!
//! ## Test Categories
//!
//! - `test_api_health_*`: Health endpoint tests
//! - `test_api_devices_*`: Device endpoint tests
//! - `test_api_compile_*`: Compile endpoint tests

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lume_api::{handlers, ApiConfig, ApiError, AppState};

use lume_tests::prelude::*;

fn test_state() -> AppState {
    init_test_logging();
    AppState::new(Arc::new(DeviceFixtures::registry()), ApiConfig::default())
}

// =============================================================================
// Health Tests
// =============================================================================

#[tokio::test]
async fn test_api_health_reports_version() {
    let response = handlers::health().await;
    assert!(response.success);
    let health = response.data.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, lume_api::VERSION);
}

// =============================================================================
// Device Tests
// =============================================================================

#[tokio::test]
async fn test_api_devices_listed_in_registry_order() {
    let response = handlers::list_devices(State(test_state())).await;
    let devices = response.data.unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id, "strip-a");
    assert_eq!(devices[1].id, "strip-b");
    assert_eq!(devices[1].service, "modbus_master_/ttyUSB1");
}

#[tokio::test]
async fn test_api_devices_get_by_id() {
    let response = handlers::get_device(State(test_state()), Path("strip-b".to_string()))
        .await
        .unwrap();
    let device = response.data.unwrap();
    assert_eq!(device.slave, 129);
    assert_eq!(device.strip_size, 100);
}

#[tokio::test]
async fn test_api_devices_unknown_id_is_not_found() {
    let err = handlers::get_device(State(test_state()), Path("strip-z".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), "NOT_FOUND");
}

// =============================================================================
// Compile Tests
// =============================================================================

#[tokio::test]
async fn test_api_compile_returns_batches_in_order() {
    let commands = vec![
        CommandFixtures::solid_rgb("strip-a", [1, 2, 3]),
        CommandFixtures::fx_noise("strip-b"),
    ];
    let response = handlers::compile(State(test_state()), Json(commands))
        .await
        .unwrap();
    let batches = response.data.unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].id, "strip-a");
    assert_eq!(batches[1].id, "strip-b");
    assert_eq!(batches[1].payload.last().unwrap().comment, "flags");
}

#[tokio::test]
async fn test_api_compile_empty_batch_is_bad_request() {
    let err = handlers::compile(State(test_state()), Json(vec![]))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_compile_unknown_device_maps_to_404() {
    let err = handlers::compile(
        State(test_state()),
        Json(vec![CommandFixtures::off("strip-z")]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Compile(_)));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), "UNKNOWN_DEVICE");
}

#[tokio::test]
async fn test_api_compile_value_range_maps_to_400() {
    let mut command = CommandFixtures::off("strip-a");
    command.brightness = Some(999);
    let err = handlers::compile(State(test_state()), Json(vec![command]))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "VALUE_RANGE");
}

#[tokio::test]
async fn test_api_compile_whole_batch_fails_on_one_error() {
    let commands = vec![
        CommandFixtures::off("strip-a"),
        CommandFixtures::off("strip-z"),
    ];
    let err = handlers::compile(State(test_state()), Json(commands))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNKNOWN_DEVICE");
}
