// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # lume-config
//!
//! Configuration loading and device registry construction for LUME.
//!
//! The configuration document carries two top-level collections: a
//! `device` array of fixture descriptors and an `mmap` mapping of memory
//! map blocks (symbolic register name → integer offset). Each device's
//! `mmap_id` must key into `mmap`.
//!
//! ```json
//! {
//!   "device": [
//!     { "id": "strip-a", "location": "ttyUSB0", "slave": 128,
//!       "mmap_id": "ws2812_v1", "strip_size": 60 }
//!   ],
//!   "mmap": {
//!     "ws2812_v1": { "brightness": 0, "palette_id": 1, "rgb": 2, "flags": 3 }
//!   }
//! }
//! ```
//!
//! JSON and YAML are supported, selected by file extension. All
//! validation is performed at load time; the resulting
//! [`DeviceRegistry`](lume_core::DeviceRegistry) is fully typed and
//! read-only.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod loader;
pub mod parser;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use loader::{
    document_from_str, load_document, load_registry, registry_from_str, ConfigFormat,
};
pub use parser::parse_document;
pub use schema::{ConfigDocument, DeviceEntry};

// Re-export the error types callers match on.
pub use lume_core::error::{ConfigError, ConfigResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
