// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Device model, symbolic address resolution, and the device registry.
//!
//! A [`Device`] pairs bus identity (location, slave id) with a validated
//! [`RegisterMap`] that turns symbolic register names into 16-bit bus
//! addresses. Devices are constructed once from configuration and never
//! mutated afterwards; the [`DeviceRegistry`] is read-only for the
//! lifetime of the process, which makes concurrent compilation safe
//! without coordination.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CompileError, CompileResult, ConfigError, ConfigResult};
use crate::protocol::{Register, COMMAND_REGION_BASE};

// =============================================================================
// RegisterMap
// =============================================================================

/// A validated mapping from symbolic register to its offset within the
/// command region.
///
/// Offsets are relative to [`COMMAND_REGION_BASE`]; the base is applied
/// during [`Device::resolve`]. Maps may be partial: a device only needs
/// the registers of the modes it is used with, and a missing register is
/// a compile-time error for the command that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMap {
    offsets: BTreeMap<Register, u16>,
}

impl RegisterMap {
    /// Creates an empty register map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an offset for a register, replacing any previous entry.
    pub fn insert(&mut self, register: Register, offset: u16) {
        self.offsets.insert(register, offset);
    }

    /// Returns the offset mapped for a register, if any.
    #[inline]
    pub fn get(&self, register: Register) -> Option<u16> {
        self.offsets.get(&register).copied()
    }

    /// Returns `true` if the register is mapped.
    #[inline]
    pub fn contains(&self, register: Register) -> bool {
        self.offsets.contains_key(&register)
    }

    /// Returns the number of mapped registers.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no registers are mapped.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterates over mapped registers and offsets in register order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u16)> + '_ {
        self.offsets.iter().map(|(r, o)| (*r, *o))
    }
}

impl FromIterator<(Register, u16)> for RegisterMap {
    fn from_iter<T: IntoIterator<Item = (Register, u16)>>(iter: T) -> Self {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Device
// =============================================================================

/// A single addressable lighting fixture on the bus.
///
/// Constructed once from configuration at process start and immutable
/// thereafter; command compilation never mutates a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier within the registry.
    pub id: String,

    /// Bus path/channel identifier, e.g. a serial line name.
    pub location: String,

    /// Bus-level slave address of the device.
    pub slave: u8,

    /// Identifier of the memory map block this device uses.
    pub mmap_id: String,

    /// Number of addressable pixels on the strip. Always at least 1.
    pub strip_size: usize,

    /// Validated symbolic register map.
    pub registers: RegisterMap,
}

impl Device {
    /// Resolves a symbolic register plus byte offset to a bus address.
    ///
    /// The result is `COMMAND_REGION_BASE + base + offset`. Fails with
    /// [`CompileError::MissingField`] when the register is not mapped for
    /// this device and with [`CompileError::ValueRange`] when the sum
    /// does not fit an unsigned 16-bit address.
    pub fn resolve(&self, register: Register, offset: u32) -> CompileResult<u16> {
        let base = self.registers.get(register).ok_or_else(|| {
            CompileError::missing_field(
                register.as_str(),
                format!("memory map '{}' of device '{}'", self.mmap_id, self.id),
            )
        })?;

        let address = u32::from(COMMAND_REGION_BASE) + u32::from(base) + offset;
        if address > u32::from(u16::MAX) {
            return Err(CompileError::value_range(
                register.as_str(),
                i64::from(address),
                0,
                i64::from(u16::MAX),
            ));
        }
        Ok(address as u16)
    }

    /// Returns the routing target the external dispatcher uses for this
    /// device.
    pub fn service_target(&self) -> String {
        format!("modbus_master_/{}", self.location)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (slave {} on {}, {} px)",
            self.id, self.slave, self.location, self.strip_size
        )
    }
}

// =============================================================================
// DeviceRegistry
// =============================================================================

/// An ordered, read-only collection of devices keyed by id.
///
/// Lookup is by exact identifier match, not case-insensitive. Built once
/// from configuration; duplicate ids are rejected at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a sequence of devices, preserving order.
    ///
    /// Fails with [`ConfigError::DuplicateDeviceId`] if two devices share
    /// an id.
    pub fn from_devices(devices: Vec<Device>) -> ConfigResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for device in &devices {
            if !seen.insert(device.id.as_str()) {
                return Err(ConfigError::duplicate_device_id(&device.id));
            }
        }
        Ok(Self { devices })
    }

    /// Returns the device with the given id, if present.
    pub fn get(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == device_id)
    }

    /// Returns the device with the given id, failing with
    /// [`CompileError::UnknownDevice`] if absent.
    pub fn require(&self, device_id: &str) -> CompileResult<&Device> {
        self.get(device_id)
            .ok_or_else(|| CompileError::unknown_device(device_id))
    }

    /// Iterates over devices in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Returns the number of devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the registry holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns all device ids in registry order.
    pub fn device_ids(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.id.as_str()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
