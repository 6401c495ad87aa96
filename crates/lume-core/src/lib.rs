// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # lume-core
//!
//! Core protocol model and shared types for LUME, the lighting unit
//! Modbus encoder.
//!
//! This crate provides the foundational types used across all LUME
//! components:
//!
//! - **Protocol**: bus constants, the closed [`protocol::Register`]
//!   namespace, and the flags register layout
//! - **Device**: the per-device address map model and the read-only
//!   [`device::DeviceRegistry`]
//! - **Instruction**: compiled bus write instructions and per-command
//!   output batches
//! - **Error**: unified error hierarchy with the compile-time taxonomy
//!   (`MissingField`, `WrongType`, `ValueRange`, `UnknownDevice`,
//!   `InvalidMode`)
//!
//! Everything here is purely functional over its inputs: no I/O, no
//! mutable shared state, safe to use concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use lume_core::device::{Device, RegisterMap};
//! use lume_core::protocol::Register;
//!
//! let device = Device {
//!     id: "strip-a".to_string(),
//!     location: "ttyUSB0".to_string(),
//!     slave: 128,
//!     mmap_id: "ws2812_v1".to_string(),
//!     strip_size: 60,
//!     registers: RegisterMap::from_iter([(Register::Flags, 0x0003)]),
//! };
//!
//! assert_eq!(device.resolve(Register::Flags, 0).unwrap(), 0x1003);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod device;
pub mod error;
pub mod instruction;
pub mod protocol;

// =============================================================================
// Re-exports for convenience
// =============================================================================

pub use device::{Device, DeviceRegistry, RegisterMap};
pub use error::{CompileError, CompileResult, ConfigError, ConfigResult, LumeError};
pub use instruction::{CompiledBatch, Instruction};
pub use protocol::{
    Effect, Register, COMMAND_REGION_BASE, FCODE_WRITE_BYTES, FLAG_UPDATED, MAX_STRIP_PIXELS,
    MAX_WRITE_PAYLOAD,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
