// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Unified error hierarchy for LUME.
//!
//! # Error Hierarchy
//!
//! ```text
//! LumeError (root)
//! ├── ConfigError   - Configuration parsing and registry construction
//! └── CompileError  - Command-to-instruction compilation
//! ```
//!
//! Compilation is pure and deterministic, so no error in this hierarchy
//! is retryable: the same input always fails the same way. Every variant
//! carries the offending field name and raw value so a failure can be
//! diagnosed without re-running.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// LumeError - Root Error Type
// =============================================================================

/// The root error type for LUME.
///
/// All errors in LUME can be converted to this type, providing a unified
/// error handling interface across the entire system.
#[derive(Debug, Error)]
pub enum LumeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Compilation error.
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),
}

impl LumeError {
    /// Returns the error type as a string for logging/metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            LumeError::Config(_) => "config",
            LumeError::Compile(_) => "compile",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            LumeError::Config(_) => 400,
            LumeError::Compile(e) => e.status_code(),
        }
    }
}

// =============================================================================
// ConfigError
// =============================================================================

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-related errors.
///
/// Covers document parsing, semantic validation, and device registry
/// construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse the configuration document.
    #[error("Failed to parse config '{path}': {message}")]
    Parse {
        /// Path to the configuration file (or a pseudo-path for inline
        /// documents).
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// File I/O error.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Required field is missing from the document.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field path.
        field: String,
    },

    /// Field is present but has the wrong shape.
    #[error("Invalid value for '{field}': expected {expected}, got {actual}")]
    WrongType {
        /// The field path.
        field: String,
        /// Expected type.
        expected: String,
        /// Actual type or value.
        actual: String,
    },

    /// A device references a memory map id that does not exist.
    #[error("Device '{device_id}' references unknown memory map '{mmap_id}'")]
    UnknownMmapId {
        /// The device id.
        device_id: String,
        /// The unresolved memory map id.
        mmap_id: String,
    },

    /// A memory map defines a register name outside the closed namespace.
    #[error("Memory map '{mmap_id}' defines unknown register '{register}'")]
    UnknownRegister {
        /// The memory map id.
        mmap_id: String,
        /// The unrecognized register name.
        register: String,
    },

    /// Duplicate device ID.
    #[error("Duplicate device ID: {device_id}")]
    DuplicateDeviceId {
        /// The duplicated device ID.
        device_id: String,
    },

    /// Numeric value out of range.
    #[error("Value out of range for '{field}': {value} (expected {min}..={max})")]
    OutOfRange {
        /// The field path.
        field: String,
        /// The actual value.
        value: i64,
        /// Minimum permissible value.
        min: i64,
        /// Maximum permissible value.
        max: i64,
    },

    /// Semantic validation failed.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a wrong type error.
    pub fn wrong_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::WrongType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an unknown memory map id error.
    pub fn unknown_mmap_id(device_id: impl Into<String>, mmap_id: impl Into<String>) -> Self {
        Self::UnknownMmapId {
            device_id: device_id.into(),
            mmap_id: mmap_id.into(),
        }
    }

    /// Creates an unknown register error.
    pub fn unknown_register(mmap_id: impl Into<String>, register: impl Into<String>) -> Self {
        Self::UnknownRegister {
            mmap_id: mmap_id.into(),
            register: register.into(),
        }
    }

    /// Creates a duplicate device ID error.
    pub fn duplicate_device_id(device_id: impl Into<String>) -> Self {
        Self::DuplicateDeviceId {
            device_id: device_id.into(),
        }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Creates a validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// CompileError
// =============================================================================

/// Result type alias for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors produced while compiling a command into bus instructions.
///
/// Validation is eager and fail-fast: the first violated invariant aborts
/// the command's compilation; there is no partial instruction list for a
/// failed command.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A field required by the selected mode (or a register required by
    /// the compiler) is absent.
    #[error("Missing required field '{field}' ({context})")]
    MissingField {
        /// The missing field or register name.
        field: String,
        /// Where it was expected (command or device memory map).
        context: String,
    },

    /// A field is present but has the wrong shape.
    #[error("Invalid value for '{field}': expected {expected}")]
    WrongType {
        /// The field name.
        field: String,
        /// Expected shape.
        expected: String,
    },

    /// A numeric value is outside the protocol's permissible range.
    #[error("Value out of range for '{field}': {value} (expected {min}..={max})")]
    ValueRange {
        /// The field or register name.
        field: String,
        /// The offending value.
        value: i64,
        /// Minimum permissible value.
        min: i64,
        /// Maximum permissible value.
        max: i64,
    },

    /// The command references a device id not present in the registry.
    #[error("Unknown device: {device_id}")]
    UnknownDevice {
        /// The unresolved device id.
        device_id: String,
    },

    /// The command's mode is not one of the closed set.
    #[error("Invalid mode '{mode}' (expected off, solid_rgb, fx_fire, fx_torch, or fx_noise)")]
    InvalidMode {
        /// The unrecognized mode string.
        mode: String,
    },
}

impl CompileError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Creates a wrong type error.
    pub fn wrong_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::WrongType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Creates a value range error.
    pub fn value_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::ValueRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Creates an unknown device error.
    pub fn unknown_device(device_id: impl Into<String>) -> Self {
        Self::UnknownDevice {
            device_id: device_id.into(),
        }
    }

    /// Creates an invalid mode error.
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    /// Returns the error code as a string for logging and API responses.
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::MissingField { .. } => "MISSING_FIELD",
            CompileError::WrongType { .. } => "WRONG_TYPE",
            CompileError::ValueRange { .. } => "VALUE_RANGE",
            CompileError::UnknownDevice { .. } => "UNKNOWN_DEVICE",
            CompileError::InvalidMode { .. } => "INVALID_MODE",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            CompileError::UnknownDevice { .. } => 404,
            _ => 400,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_codes() {
        assert_eq!(
            CompileError::missing_field("brightness", "command").code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CompileError::value_range("brightness", 300, 0, 255).code(),
            "VALUE_RANGE"
        );
        assert_eq!(CompileError::unknown_device("x").code(), "UNKNOWN_DEVICE");
        assert_eq!(CompileError::invalid_mode("blink").code(), "INVALID_MODE");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CompileError::unknown_device("x").status_code(), 404);
        assert_eq!(CompileError::invalid_mode("blink").status_code(), 400);
        let root: LumeError = CompileError::unknown_device("x").into();
        assert_eq!(root.status_code(), 404);
        assert_eq!(root.error_type(), "compile");
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = CompileError::value_range("palette_id", -1, 0, 255);
        let msg = err.to_string();
        assert!(msg.contains("palette_id"));
        assert!(msg.contains("-1"));
        assert!(msg.contains("255"));

        let err = ConfigError::unknown_mmap_id("strip-a", "ws2812_v9");
        let msg = err.to_string();
        assert!(msg.contains("strip-a"));
        assert!(msg.contains("ws2812_v9"));
    }
}
