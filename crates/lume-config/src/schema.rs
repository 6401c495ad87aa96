// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration schema for LUME.
//!
//! The configuration document has two top-level collections:
//!
//! ```text
//! ConfigDocument
//! ├── device: [DeviceEntry]                       - device descriptors
//! └── mmap: { mmap_id: { register: offset } }     - memory map blocks
//! ```
//!
//! The document is an *input representation*: field values are carried
//! wide (`i64`) so range checks stay in LUME's own error taxonomy instead
//! of failing inside the deserializer. [`ConfigDocument::build_registry`]
//! turns the document into the typed, validated
//! [`DeviceRegistry`](lume_core::DeviceRegistry) the compiler works with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lume_core::device::{Device, DeviceRegistry, RegisterMap};
use lume_core::error::{ConfigError, ConfigResult};
use lume_core::protocol::{Register, MAX_STRIP_PIXELS};

// =============================================================================
// ConfigDocument
// =============================================================================

/// The root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Device descriptors, in registry order.
    pub devices: Vec<DeviceEntry>,

    /// Memory map blocks, keyed by map identifier.
    pub mmaps: BTreeMap<String, BTreeMap<String, i64>>,
}

impl ConfigDocument {
    /// Validates the document and builds the device registry.
    ///
    /// Performs all load-time validation:
    ///
    /// - slave ids must fit an unsigned 8-bit value
    /// - strip sizes must be positive and addressable
    ///   (at most [`MAX_STRIP_PIXELS`])
    /// - every `mmap_id` must key into `mmap`
    /// - every register name must belong to the closed
    ///   [`Register`] namespace
    /// - register offsets must fit the 16-bit address space
    /// - device ids must be unique
    pub fn build_registry(&self) -> ConfigResult<DeviceRegistry> {
        let mut devices = Vec::with_capacity(self.devices.len());
        for entry in &self.devices {
            devices.push(entry.build_device(&self.mmaps)?);
        }
        DeviceRegistry::from_devices(devices)
    }
}

// =============================================================================
// DeviceEntry
// =============================================================================

/// One device descriptor as it appears in the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// Unique device identifier.
    pub id: String,

    /// Bus path/channel identifier.
    pub location: String,

    /// Bus-level slave address. Validated into `u8` at build time.
    pub slave: i64,

    /// Memory map block identifier. Must key into the document's `mmap`.
    pub mmap_id: String,

    /// Number of addressable pixels. Must be positive.
    pub strip_size: i64,
}

impl DeviceEntry {
    /// Validates this entry against the memory map blocks and builds the
    /// runtime device.
    pub fn build_device(
        &self,
        mmaps: &BTreeMap<String, BTreeMap<String, i64>>,
    ) -> ConfigResult<Device> {
        if self.id.is_empty() {
            return Err(ConfigError::validation("device.id", "cannot be empty"));
        }
        if self.location.is_empty() {
            return Err(ConfigError::validation(
                format!("device.{}.location", self.id),
                "cannot be empty",
            ));
        }

        let slave = u8::try_from(self.slave).map_err(|_| {
            ConfigError::out_of_range(
                format!("device.{}.slave", self.id),
                self.slave,
                0,
                i64::from(u8::MAX),
            )
        })?;

        if self.strip_size < 1 {
            return Err(ConfigError::validation(
                format!("device.{}.strip_size", self.id),
                format!("must be a positive pixel count, got {}", self.strip_size),
            ));
        }
        if self.strip_size > MAX_STRIP_PIXELS as i64 {
            return Err(ConfigError::out_of_range(
                format!("device.{}.strip_size", self.id),
                self.strip_size,
                1,
                MAX_STRIP_PIXELS as i64,
            ));
        }

        let block = mmaps
            .get(&self.mmap_id)
            .ok_or_else(|| ConfigError::unknown_mmap_id(&self.id, &self.mmap_id))?;

        let registers = build_register_map(&self.mmap_id, block)?;

        Ok(Device {
            id: self.id.clone(),
            location: self.location.clone(),
            slave,
            mmap_id: self.mmap_id.clone(),
            strip_size: self.strip_size as usize,
            registers,
        })
    }
}

/// Validates one memory map block into a typed register map.
fn build_register_map(
    mmap_id: &str,
    block: &BTreeMap<String, i64>,
) -> ConfigResult<RegisterMap> {
    let mut registers = RegisterMap::new();
    for (name, offset) in block {
        let register: Register = name
            .parse()
            .map_err(|_| ConfigError::unknown_register(mmap_id, name))?;

        let offset = u16::try_from(*offset).map_err(|_| {
            ConfigError::out_of_range(
                format!("mmap.{mmap_id}.{name}"),
                *offset,
                0,
                i64::from(u16::MAX),
            )
        })?;

        registers.insert(register, offset);
    }
    Ok(registers)
}

// =============================================================================
// Tests
// =============================================================================
