// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Config Integration Tests
//!
//! Integration tests for configuration loading and registry construction:
//!
//! - JSON and YAML parsing
//! - Typed error reporting with field paths
//! - Registry validation rules
//!
//! ## Test Categories
//!
//! - `test_load_*`: File loading tests
//! - `test_parse_*`: Document parsing tests
//! - `test_validation_*`: Registry validation tests

use lume_config::{load_registry, registry_from_str, ConfigFormat};
use lume_core::error::ConfigError;
use lume_core::protocol::Register;

use lume_tests::prelude::*;

fn inline_registry(text: &str) -> Result<lume_core::device::DeviceRegistry, ConfigError> {
    init_test_logging();
    registry_from_str(text, ConfigFormat::Json, "inline.json")
}

// =============================================================================
// File Loading Tests
// =============================================================================

#[test]
fn test_load_json_config_file() {
    init_test_logging();
    let file = temp_config_file(".json", ConfigFixtures::json());
    let registry = load_registry(file.path()).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.device_ids(), vec!["strip-a", "strip-b"]);

    let long = registry.get("strip-b").unwrap();
    assert_eq!(long.slave, 129);
    assert_eq!(long.strip_size, 100);
    assert_eq!(long.registers.len(), 13);
    assert_eq!(long.registers.get(Register::NoiseScale), Some(33));
}

#[test]
fn test_load_yaml_config_file() {
    let file = temp_config_file(".yaml", ConfigFixtures::yaml_short());
    let registry = load_registry(file.path()).unwrap();

    let device = registry.get("strip-a").unwrap();
    assert_eq!(device.location, "ttyUSB0");
    assert_eq!(device.registers.get(Register::Flags), Some(3));
}

#[test]
fn test_load_missing_file() {
    let err = load_registry("/nonexistent/lume.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_malformed_json() {
    let file = temp_config_file(".json", "{broken");
    let err = load_registry(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

// =============================================================================
// Document Parsing Tests
// =============================================================================

#[test]
fn test_parse_missing_device_field_reports_path() {
    let text = r#"{
        "device": [{ "id": "strip-a", "location": "ttyUSB0", "mmap_id": "m", "strip_size": 1 }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField { .. }));
    let msg = err.to_string();
    assert!(msg.contains("slave"), "{msg}");
    assert!(msg.contains("device[0]"), "{msg}");
}

#[test]
fn test_parse_wrong_type() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": "not-a-number",
            "mmap_id": "m", "strip_size": 1
        }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::WrongType { .. }));
}

#[test]
fn test_parse_unknown_register_name_rejected() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 1,
            "mmap_id": "m", "strip_size": 1
        }],
        "mmap": { "m": { "flags": 0, "sparkle_mode": 9 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRegister { .. }));
    assert!(err.to_string().contains("sparkle_mode"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validation_unknown_mmap_id() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 1,
            "mmap_id": "missing", "strip_size": 1
        }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMmapId { .. }));
}

#[test]
fn test_validation_duplicate_device_id() {
    let text = r#"{
        "device": [
            { "id": "strip-a", "location": "ttyUSB0", "slave": 1, "mmap_id": "m", "strip_size": 1 },
            { "id": "strip-a", "location": "ttyUSB1", "slave": 2, "mmap_id": "m", "strip_size": 1 }
        ],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateDeviceId { .. }));
}

#[test]
fn test_validation_slave_out_of_range() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 300,
            "mmap_id": "m", "strip_size": 1
        }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn test_validation_zero_strip_size() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 1,
            "mmap_id": "m", "strip_size": 0
        }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn test_validation_strip_size_above_pixel_cap() {
    // A strip this long cannot be addressed within 16 bits, and its
    // fill must never be allocated.
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 1,
            "mmap_id": "m", "strip_size": 1000000000
        }],
        "mmap": { "m": { "flags": 0 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange { value: 1_000_000_000, .. }
    ));
}

#[test]
fn test_validation_register_offset_out_of_range() {
    let text = r#"{
        "device": [{
            "id": "strip-a", "location": "ttyUSB0", "slave": 1,
            "mmap_id": "m", "strip_size": 1
        }],
        "mmap": { "m": { "flags": 70000 } }
    }"#;
    let err = inline_registry(text).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

// =============================================================================
// End-to-End: Config Through Compiler
// =============================================================================

#[test]
fn test_loaded_registry_compiles_commands() {
    let file = temp_config_file(".json", ConfigFixtures::json());
    let registry = load_registry(file.path()).unwrap();

    let batch =
        lume_compiler::compile(&registry, &CommandFixtures::fx_torch("strip-b")).unwrap();
    assert_eq!(batch.service, "modbus_master_/ttyUSB1");
    assert_eq!(batch.payload.last().unwrap().comment, "flags");
    assert_eq!(batch.payload.last().unwrap().addr, 0x1003);
}
