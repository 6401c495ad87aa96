// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # LUME Integration Tests
//!
//! This crate provides integration tests for the LUME lighting command
//! compiler. It includes shared fixtures and helpers used across the
//! test suites.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p lume-tests
//!
//! # Run specific test suite
//! cargo test -p lume-tests --test integration_compiler
//! cargo test -p lume-tests --test integration_config
//! cargo test -p lume-tests --test integration_api
//! ```
//!
//! ## Test Categories
//!
//! ### Compiler Tests (`integration_compiler.rs`)
//! - End-to-end compilation for every effect mode
//! - Instruction ordering and terminal flags write
//! - Payload chunking for long strips
//! - Error taxonomy coverage
//!
//! ### Config Tests (`integration_config.rs`)
//! - Configuration parsing (JSON, YAML)
//! - Registry construction and validation rules
//! - Error reporting with field paths
//!
//! ### API Tests (`integration_api.rs`)
//! - Handler behavior for all endpoints
//! - Error mapping to HTTP status codes

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;

/// Re-export commonly used items for convenience.
pub mod prelude {
    pub use crate::common::fixtures::*;
    pub use crate::common::*;
}
