// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Compiled bus write instructions and per-command output batches.
//!
//! Instructions are immutable value objects. A command compiles to an
//! ordered sequence of them and the order is significant: the fixture
//! applies writes in batch order, and the flags write that switches the
//! effect must land last.

use serde::{Deserialize, Serialize};

use crate::protocol::FCODE_WRITE_BYTES;

// =============================================================================
// Instruction
// =============================================================================

/// One atomic write request against a physically addressed device.
///
/// Serialized field names are the wire contract consumed by the external
/// dispatcher: `device`, `slave`, `fcode`, `addr`, `count`, `value`,
/// `comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Bus path/channel of the target device.
    pub device: String,

    /// Bus-level slave address.
    pub slave: u8,

    /// Protocol function code.
    pub fcode: u8,

    /// Resolved 16-bit bus address.
    pub addr: u16,

    /// Number of bytes written.
    pub count: u16,

    /// Payload bytes, in write order.
    pub value: Vec<u8>,

    /// Human-readable tag of what field this instruction carries.
    pub comment: String,
}

impl Instruction {
    /// Creates a byte-write instruction.
    ///
    /// `count` is derived from the payload length. The payload must fit a
    /// single bus transaction; chunking long sequences is the encoder's
    /// responsibility.
    pub fn write_bytes(
        device: impl Into<String>,
        slave: u8,
        addr: u16,
        value: Vec<u8>,
        comment: impl Into<String>,
    ) -> Self {
        let count = value.len() as u16;
        Self {
            device: device.into(),
            slave,
            fcode: FCODE_WRITE_BYTES,
            addr,
            count,
            value,
            comment: comment.into(),
        }
    }
}

// =============================================================================
// CompiledBatch
// =============================================================================

/// The compiled output for one input command.
///
/// `service` is derived deterministically from the device's bus location
/// and is used by the external dispatcher for routing; the core does not
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledBatch {
    /// The device identifier the command addressed.
    pub id: String,

    /// Routing target for the external dispatcher.
    pub service: String,

    /// Ordered instruction sequence. Order must be preserved exactly.
    pub payload: Vec<Instruction>,
}

impl CompiledBatch {
    /// Returns the number of instructions in the batch.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns `true` if the batch holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bytes_derives_count() {
        let instruction =
            Instruction::write_bytes("ttyUSB0", 128, 0x1002, vec![2, 1, 3], "rgb");
        assert_eq!(instruction.fcode, FCODE_WRITE_BYTES);
        assert_eq!(instruction.count, 3);
        assert_eq!(instruction.value, vec![2, 1, 3]);
    }

    #[test]
    fn test_wire_field_names() {
        let instruction = Instruction::write_bytes("ttyUSB0", 128, 0x1000, vec![10], "brightness");
        let json = serde_json::to_value(&instruction).unwrap();
        for key in ["device", "slave", "fcode", "addr", "count", "value", "comment"] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(json["fcode"], 66);
        assert_eq!(json["addr"], 0x1000);
    }

    #[test]
    fn test_batch_wire_shape() {
        let batch = CompiledBatch {
            id: "strip-a".to_string(),
            service: "modbus_master_/ttyUSB0".to_string(),
            payload: vec![],
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["id"], "strip-a");
        assert_eq!(json["service"], "modbus_master_/ttyUSB0");
        assert!(json["payload"].as_array().unwrap().is_empty());
    }
}
