// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Pre-built test data for consistent and reproducible testing.
//!
//! The fixture registry mirrors a small production deployment: one short
//! strip with a minimal register map and one long strip whose fill
//! payload exceeds a single bus transaction.

use lume_compiler::Command;
use lume_core::device::{Device, DeviceRegistry, RegisterMap};
use lume_core::protocol::Register;

// =============================================================================
// Device Fixtures
// =============================================================================

/// Fixture providing standard device configurations.
pub struct DeviceFixtures;

impl DeviceFixtures {
    /// A two-pixel strip with only the registers the basic modes need.
    pub fn short_strip() -> Device {
        Device {
            id: "strip-a".to_string(),
            location: "ttyUSB0".to_string(),
            slave: 128,
            mmap_id: "ws2812_v1".to_string(),
            strip_size: 2,
            registers: RegisterMap::from_iter([
                (Register::Brightness, 0x0000),
                (Register::PaletteId, 0x0001),
                (Register::Rgb, 0x0002),
                (Register::Flags, 0x0003),
            ]),
        }
    }

    /// A 100-pixel strip with the full register map. Its solid fill is
    /// 300 bytes, which forces payload chunking.
    pub fn long_strip() -> Device {
        Device {
            id: "strip-b".to_string(),
            location: "ttyUSB1".to_string(),
            slave: 129,
            mmap_id: "ws2812_full".to_string(),
            strip_size: 100,
            registers: Self::full_register_map(),
        }
    }

    /// A register map covering every symbolic register.
    pub fn full_register_map() -> RegisterMap {
        RegisterMap::from_iter([
            (Register::Brightness, 0x0000),
            (Register::PaletteId, 0x0001),
            (Register::Rgb, 0x0002),
            (Register::Flags, 0x0003),
            (Register::TorchSparkThreshold, 0x0010),
            (Register::TorchAdjH, 0x0011),
            (Register::TorchAdjV, 0x0012),
            (Register::TorchPassiveRetention, 0x0013),
            (Register::TorchSparkTransfer, 0x0014),
            (Register::TorchSparkRetention, 0x0015),
            (Register::TorchColorCoeff, 0x0016),
            (Register::NoiseSpeedStep, 0x0020),
            (Register::NoiseScale, 0x0021),
        ])
    }

    /// A registry with the short and long strips.
    pub fn registry() -> DeviceRegistry {
        DeviceRegistry::from_devices(vec![Self::short_strip(), Self::long_strip()])
            .expect("fixture registry must build")
    }
}

// =============================================================================
// Command Fixtures
// =============================================================================

/// Fixture providing one valid command per effect mode.
pub struct CommandFixtures;

impl CommandFixtures {
    /// A valid `off` command.
    pub fn off(device_id: &str) -> Command {
        Command {
            id: Some(device_id.to_string()),
            mode: Some("off".to_string()),
            brightness: Some(0),
            palette_id: Some(0),
            ..Command::default()
        }
    }

    /// A valid `solid_rgb` command.
    pub fn solid_rgb(device_id: &str, rgb: [i64; 3]) -> Command {
        Command {
            id: Some(device_id.to_string()),
            mode: Some("solid_rgb".to_string()),
            brightness: Some(10),
            palette_id: Some(1),
            rgb: Some(rgb.to_vec()),
            ..Command::default()
        }
    }

    /// A valid `fx_fire` command.
    pub fn fx_fire(device_id: &str) -> Command {
        Command {
            id: Some(device_id.to_string()),
            mode: Some("fx_fire".to_string()),
            brightness: Some(200),
            palette_id: Some(0),
            ..Command::default()
        }
    }

    /// A valid `fx_torch` command with all tuning parameters.
    pub fn fx_torch(device_id: &str) -> Command {
        Command {
            id: Some(device_id.to_string()),
            mode: Some("fx_torch".to_string()),
            brightness: Some(128),
            palette_id: Some(2),
            torch_spark_threshold: Some(80),
            torch_adj_h: Some(10),
            torch_adj_v: Some(20),
            torch_passive_retention: Some(30),
            torch_spark_transfer: Some(40),
            torch_spark_retention: Some(50),
            torch_color_coeff: Some(vec![255, 180, 40]),
            ..Command::default()
        }
    }

    /// A valid `fx_noise` command.
    pub fn fx_noise(device_id: &str) -> Command {
        Command {
            id: Some(device_id.to_string()),
            mode: Some("fx_noise".to_string()),
            brightness: Some(100),
            palette_id: Some(3),
            noise_speed_step: Some(5),
            noise_scale: Some(30),
            ..Command::default()
        }
    }
}

// =============================================================================
// Config Fixtures
// =============================================================================

/// Fixture providing configuration documents as text.
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// JSON configuration matching [`DeviceFixtures::registry`].
    pub fn json() -> &'static str {
        r#"{
            "device": [
                {
                    "id": "strip-a",
                    "location": "ttyUSB0",
                    "slave": 128,
                    "mmap_id": "ws2812_v1",
                    "strip_size": 2
                },
                {
                    "id": "strip-b",
                    "location": "ttyUSB1",
                    "slave": 129,
                    "mmap_id": "ws2812_full",
                    "strip_size": 100
                }
            ],
            "mmap": {
                "ws2812_v1": {
                    "brightness": 0,
                    "palette_id": 1,
                    "rgb": 2,
                    "flags": 3
                },
                "ws2812_full": {
                    "brightness": 0,
                    "palette_id": 1,
                    "rgb": 2,
                    "flags": 3,
                    "torch_spark_threshold": 16,
                    "torch_adj_h": 17,
                    "torch_adj_v": 18,
                    "torch_passive_retention": 19,
                    "torch_spark_transfer": 20,
                    "torch_spark_retention": 21,
                    "torch_color_coeff": 22,
                    "noise_speed_step": 32,
                    "noise_scale": 33
                }
            }
        }"#
    }

    /// YAML configuration equivalent to [`ConfigFixtures::json`] for the
    /// short strip only.
    pub fn yaml_short() -> &'static str {
        r#"
device:
  - id: strip-a
    location: ttyUSB0
    slave: 128
    mmap_id: ws2812_v1
    strip_size: 2
mmap:
  ws2812_v1:
    brightness: 0
    palette_id: 1
    rgb: 2
    flags: 3
"#
    }
}
