// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # lume-compiler
//!
//! The command-to-instruction compiler for LUME lighting fixtures.
//!
//! Given a semantic command ("set device A to solid red", "enable the
//! fire effect on device B") and the read-only device registry, the
//! compiler validates the command's fields, resolves symbolic registers
//! to bus addresses, and emits the ordered write instruction list for
//! that command.
//!
//! - **Command**: the raw input document and its validated
//!   [`command::EffectPlan`]
//! - **Encoder**: byte-level instruction encoding with mandatory
//!   249-byte chunking
//! - **Compiler**: the mode state machine driving encoder and address
//!   resolution
//!
//! The compiler is purely functional over its inputs and safe to invoke
//! concurrently from multiple tasks without coordination.
//!
//! ## Example
//!
//! ```rust
//! use lume_compiler::{compile, Command};
//! use lume_core::device::{Device, DeviceRegistry, RegisterMap};
//! use lume_core::protocol::Register;
//!
//! let device = Device {
//!     id: "strip-a".to_string(),
//!     location: "ttyUSB0".to_string(),
//!     slave: 128,
//!     mmap_id: "ws2812_v1".to_string(),
//!     strip_size: 2,
//!     registers: RegisterMap::from_iter([
//!         (Register::Brightness, 0),
//!         (Register::PaletteId, 1),
//!         (Register::Rgb, 2),
//!         (Register::Flags, 3),
//!     ]),
//! };
//! let registry = DeviceRegistry::from_devices(vec![device]).unwrap();
//!
//! let command = Command {
//!     id: Some("strip-a".to_string()),
//!     mode: Some("solid_rgb".to_string()),
//!     brightness: Some(10),
//!     palette_id: Some(1),
//!     rgb: Some(vec![255, 0, 0]),
//!     ..Command::default()
//! };
//!
//! let batch = compile(&registry, &command).unwrap();
//! assert_eq!(batch.payload.last().unwrap().comment, "flags");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod command;
pub mod compiler;
pub mod encoder;

// =============================================================================
// Re-exports
// =============================================================================

pub use command::{Command, EffectMode, EffectPlan, NoiseParams, TorchParams};
pub use compiler::{compile, compile_batch};
pub use encoder::InstructionEncoder;

// Re-export the error types callers match on.
pub use lume_core::error::{CompileError, CompileResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
