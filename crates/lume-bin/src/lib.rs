// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # lume-bin
//!
//! CLI binary for the LUME lighting command compiler.
//!
//! This crate provides the main binary entry point, including:
//!
//! - CLI argument parsing with clap
//! - Logging initialization
//! - Graceful shutdown handling
//! - Command implementations (serve, compile, validate, version)
//!
//! ## Usage
//!
//! ```bash
//! # Start the compile API server (default command)
//! lume
//!
//! # Start with custom config
//! lume -c /etc/lume/devices.yaml
//!
//! # Compile a command batch to stdout
//! lume compile batch.json
//!
//! # Validate configuration
//! lume validate
//!
//! # Show version
//! lume version
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod shutdown;

// =============================================================================
// Re-exports
// =============================================================================

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use logging::init_logging;
pub use shutdown::shutdown_signal;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
