// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Bus protocol constants and the closed register/effect namespaces.
//!
//! Everything in this module is a protocol contract shared between the
//! compiler and the fixture firmware. None of it is configurable: the
//! command region base, the write function code, the payload limit, and
//! the flags register layout are fixed by the bus protocol, and changing
//! any of them silently corrupts physical hardware behavior.
//!
//! # Flags Register Layout
//!
//! ```text
//! bit 7        4 3       1 0
//! ┌─────────────┬─────────┬─┐
//! │  effect id  │ (unused)│U│
//! └─────────────┴─────────┴─┘
//! U = "updated" marker, always set on any flags write
//! effect id: 0 none, 1 static, 2 fire, 3 torch, 4 noise
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Protocol Constants
// =============================================================================

/// Start of the writable command region of the bus address space.
///
/// Every symbolic register offset is relative to this base. The base is a
/// protocol constant, not a per-device setting.
pub const COMMAND_REGION_BASE: u16 = 0x1000;

/// Function code for the byte-write transaction.
///
/// The bus uses a single vendor opcode for both single-byte and
/// multi-byte writes; the `count` field of the instruction distinguishes
/// them.
pub const FCODE_WRITE_BYTES: u8 = 66;

/// Maximum payload of a single write transaction, in bytes.
///
/// Byte sequences longer than this must be split into consecutive chunks,
/// each addressed at the base register advanced by the chunk's byte
/// offset.
pub const MAX_WRITE_PAYLOAD: usize = 249;

/// Maximum pixel count a strip can have and still be addressable.
///
/// A solid fill writes `strip_size * 3` bytes starting at the `rgb`
/// register, and every byte must land inside the 16-bit address space.
/// Pixel counts beyond this cannot fit regardless of where the register
/// is mapped, so larger values are rejected before any fill is built.
pub const MAX_STRIP_PIXELS: usize = (u16::MAX as usize + 1) / 3;

/// "Updated" marker bit of the flags register.
///
/// Set on every flags write so the fixture knows new parameters landed.
pub const FLAG_UPDATED: u8 = 0x01;

/// Bit position of the effect selector within the flags register.
pub const EFFECT_SHIFT: u8 = 4;

// =============================================================================
// Effect
// =============================================================================

/// Effect selector values carried in bits 4-7 of the flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// No effect; the strip is dark.
    None,
    /// Static solid color across the whole strip.
    Static,
    /// Procedural fire effect.
    Fire,
    /// Torch simulation with tunable spark parameters.
    Torch,
    /// Perlin-noise driven color animation.
    Noise,
}

impl Effect {
    /// All effect values, in selector order.
    pub const ALL: [Effect; 5] = [
        Self::None,
        Self::Static,
        Self::Fire,
        Self::Torch,
        Self::Noise,
    ];

    /// Returns the 4-bit effect selector for this effect.
    #[inline]
    pub const fn selector(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Static => 1,
            Self::Fire => 2,
            Self::Torch => 3,
            Self::Noise => 4,
        }
    }

    /// Returns the full flags register value selecting this effect.
    ///
    /// The updated marker is always set; the fixture applies previously
    /// written parameters when it observes the marker.
    #[inline]
    pub const fn flags_value(self) -> u8 {
        (self.selector() << EFFECT_SHIFT) | FLAG_UPDATED
    }

    /// Returns the effect name used in logs and comments.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Static => "static",
            Self::Fire => "fire",
            Self::Torch => "torch",
            Self::Noise => "noise",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Register
// =============================================================================

/// The closed namespace of symbolic registers a fixture memory map can
/// define.
///
/// Memory maps in the configuration key registers by these names; unknown
/// names are rejected at registry construction rather than looked up by
/// string at every compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Register {
    /// Effect selector + updated marker. Terminal write of every command.
    Flags,
    /// Global strip brightness, 0-255.
    Brightness,
    /// Palette selector for palette-driven effects.
    PaletteId,
    /// Start of the per-pixel GRB color data region.
    Rgb,
    /// Torch: spark ignition threshold.
    TorchSparkThreshold,
    /// Torch: horizontal energy adjacency coefficient.
    TorchAdjH,
    /// Torch: vertical energy adjacency coefficient.
    TorchAdjV,
    /// Torch: passive energy retention.
    TorchPassiveRetention,
    /// Torch: spark energy transfer rate.
    TorchSparkTransfer,
    /// Torch: spark energy retention.
    TorchSparkRetention,
    /// Torch: GRB color coefficient triple.
    TorchColorCoeff,
    /// Noise: animation speed step.
    NoiseSpeedStep,
    /// Noise: spatial scale.
    NoiseScale,
}

impl Register {
    /// All registers of the closed namespace.
    pub const ALL: [Register; 13] = [
        Self::Flags,
        Self::Brightness,
        Self::PaletteId,
        Self::Rgb,
        Self::TorchSparkThreshold,
        Self::TorchAdjH,
        Self::TorchAdjV,
        Self::TorchPassiveRetention,
        Self::TorchSparkTransfer,
        Self::TorchSparkRetention,
        Self::TorchColorCoeff,
        Self::NoiseSpeedStep,
        Self::NoiseScale,
    ];

    /// Returns the symbolic name used in memory maps and instruction
    /// comments.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flags => "flags",
            Self::Brightness => "brightness",
            Self::PaletteId => "palette_id",
            Self::Rgb => "rgb",
            Self::TorchSparkThreshold => "torch_spark_threshold",
            Self::TorchAdjH => "torch_adj_h",
            Self::TorchAdjV => "torch_adj_v",
            Self::TorchPassiveRetention => "torch_passive_retention",
            Self::TorchSparkTransfer => "torch_spark_transfer",
            Self::TorchSparkRetention => "torch_spark_retention",
            Self::TorchColorCoeff => "torch_color_coeff",
            Self::NoiseSpeedStep => "noise_speed_step",
            Self::NoiseScale => "noise_scale",
        }
    }
}

impl FromStr for Register {
    type Err = UnknownRegisterName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRegisterName {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a register of the closed
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown register name '{name}'")]
pub struct UnknownRegisterName {
    /// The unrecognized name.
    pub name: String,
}

// =============================================================================
// Tests
// =============================================================================
