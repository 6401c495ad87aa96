// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Document parsing with typed errors.
//!
//! This module walks a raw `serde_json::Value` tree and produces a
//! [`ConfigDocument`], reporting missing keys as
//! [`ConfigError::MissingField`] and shape mismatches as
//! [`ConfigError::WrongType`] with full field paths. A derive-based
//! deserializer would collapse both into an opaque parse error; the
//! explicit walk keeps the error taxonomy intact for callers.
//!
//! Unknown keys on a device entry are ignored, matching the tolerance of
//! the fixtures already deployed against this format. Unknown *register
//! names* inside a memory map block are not ignored; they are rejected
//! later during registry construction.

use std::collections::BTreeMap;

use serde_json::Value;

use lume_core::error::{ConfigError, ConfigResult};

use crate::schema::{ConfigDocument, DeviceEntry};

// =============================================================================
// Document Keys
// =============================================================================

const KEY_DEVICE: &str = "device";
const KEY_MMAP: &str = "mmap";

const KEY_ID: &str = "id";
const KEY_LOCATION: &str = "location";
const KEY_SLAVE: &str = "slave";
const KEY_MMAP_ID: &str = "mmap_id";
const KEY_STRIP_SIZE: &str = "strip_size";

// =============================================================================
// Document Parsing
// =============================================================================

/// Parses a raw document value into a typed [`ConfigDocument`].
///
/// The input must be an object with a `device` array and an `mmap`
/// object; see the crate documentation for the full shape.
pub fn parse_document(root: &Value) -> ConfigResult<ConfigDocument> {
    let root = root
        .as_object()
        .ok_or_else(|| ConfigError::wrong_type("$", "object", type_name(root)))?;

    let device_values = match root.get(KEY_DEVICE) {
        Some(value) => value
            .as_array()
            .ok_or_else(|| ConfigError::wrong_type(KEY_DEVICE, "array", type_name(value)))?,
        None => return Err(ConfigError::missing_field(KEY_DEVICE)),
    };

    let mmap_values = match root.get(KEY_MMAP) {
        Some(value) => value
            .as_object()
            .ok_or_else(|| ConfigError::wrong_type(KEY_MMAP, "object", type_name(value)))?,
        None => return Err(ConfigError::missing_field(KEY_MMAP)),
    };

    let mut devices = Vec::with_capacity(device_values.len());
    for (index, entry) in device_values.iter().enumerate() {
        devices.push(parse_device_entry(entry, index)?);
    }

    let mut mmaps = BTreeMap::new();
    for (mmap_id, block) in mmap_values {
        mmaps.insert(mmap_id.clone(), parse_mmap_block(mmap_id, block)?);
    }

    Ok(ConfigDocument { devices, mmaps })
}

/// Parses one element of the `device` array.
fn parse_device_entry(entry: &Value, index: usize) -> ConfigResult<DeviceEntry> {
    let path = format!("{KEY_DEVICE}[{index}]");
    let entry = entry
        .as_object()
        .ok_or_else(|| ConfigError::wrong_type(&path, "object", type_name(entry)))?;

    Ok(DeviceEntry {
        id: require_string(entry, &path, KEY_ID)?,
        location: require_string(entry, &path, KEY_LOCATION)?,
        slave: require_integer(entry, &path, KEY_SLAVE)?,
        mmap_id: require_string(entry, &path, KEY_MMAP_ID)?,
        strip_size: require_integer(entry, &path, KEY_STRIP_SIZE)?,
    })
}

/// Parses one memory map block: a mapping of register name to offset.
fn parse_mmap_block(mmap_id: &str, block: &Value) -> ConfigResult<BTreeMap<String, i64>> {
    let path = format!("{KEY_MMAP}.{mmap_id}");
    let block = block
        .as_object()
        .ok_or_else(|| ConfigError::wrong_type(&path, "object", type_name(block)))?;

    let mut offsets = BTreeMap::new();
    for (register, offset) in block {
        let offset = offset.as_i64().ok_or_else(|| {
            ConfigError::wrong_type(format!("{path}.{register}"), "integer", type_name(offset))
        })?;
        offsets.insert(register.clone(), offset);
    }
    Ok(offsets)
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Extracts a required string field.
fn require_string(
    obj: &serde_json::Map<String, Value>,
    path: &str,
    key: &str,
) -> ConfigResult<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ConfigError::wrong_type(
            format!("{path}.{key}"),
            "string",
            type_name(other),
        )),
        None => Err(ConfigError::missing_field(format!("{path}.{key}"))),
    }
}

/// Extracts a required integer field.
fn require_integer(
    obj: &serde_json::Map<String, Value>,
    path: &str,
    key: &str,
) -> ConfigResult<i64> {
    match obj.get(key) {
        Some(value) => value.as_i64().ok_or_else(|| {
            ConfigError::wrong_type(format!("{path}.{key}"), "integer", type_name(value))
        }),
        None => Err(ConfigError::missing_field(format!("{path}.{key}"))),
    }
}

/// Returns a human-readable name for a JSON value's type.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Tests
// =============================================================================
