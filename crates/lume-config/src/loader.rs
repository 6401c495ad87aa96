// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration loading for LUME.
//!
//! # Loading Pipeline
//!
//! 1. Read the file (JSON or YAML, detected by extension)
//! 2. Parse into a raw value tree
//! 3. Walk the tree into a typed [`ConfigDocument`] with typed errors
//! 4. Validate and build the [`DeviceRegistry`]

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use lume_core::device::DeviceRegistry;
use lume_core::error::{ConfigError, ConfigResult};

use crate::parser::parse_document;
use crate::schema::ConfigDocument;

// =============================================================================
// ConfigFormat
// =============================================================================

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Detects the format from a file path's extension.
    ///
    /// `.yaml` and `.yml` select YAML; everything else is treated as
    /// JSON, the format of the deployed fixture configurations.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loads a configuration document from a file.
pub fn load_document(path: impl AsRef<Path>) -> ConfigResult<ConfigDocument> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading configuration");
    document_from_str(&text, format, path)
}

/// Loads a configuration file and builds the device registry from it.
pub fn load_registry(path: impl AsRef<Path>) -> ConfigResult<DeviceRegistry> {
    let path = path.as_ref();
    let document = load_document(path)?;
    let registry = document.build_registry()?;
    info!(
        path = %path.display(),
        devices = registry.len(),
        "device registry loaded"
    );
    Ok(registry)
}

/// Parses a configuration document from text.
///
/// `origin` is used for error reporting only.
pub fn document_from_str(
    text: &str,
    format: ConfigFormat,
    origin: impl AsRef<Path>,
) -> ConfigResult<ConfigDocument> {
    let origin = origin.as_ref();
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(text)
            .map_err(|e| ConfigError::parse(origin, e.to_string()))?,
        ConfigFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(origin, e.to_string()))?,
    };
    parse_document(&value)
}

/// Parses text and builds the device registry from it.
pub fn registry_from_str(
    text: &str,
    format: ConfigFormat,
    origin: impl AsRef<Path>,
) -> ConfigResult<DeviceRegistry> {
    document_from_str(text, format, origin)?.build_registry()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_JSON: &str = r#"{
        "device": [
            {
                "id": "strip-a",
                "location": "ttyUSB0",
                "slave": 128,
                "mmap_id": "ws2812_v1",
                "strip_size": 2
            }
        ],
        "mmap": {
            "ws2812_v1": {
                "brightness": 0,
                "palette_id": 1,
                "rgb": 2,
                "flags": 3
            }
        }
    }"#;

    const SAMPLE_YAML: &str = r#"
device:
  - id: strip-a
    location: ttyUSB0
    slave: 128
    mmap_id: ws2812_v1
    strip_size: 2
mmap:
  ws2812_v1:
    brightness: 0
    palette_id: 1
    rgb: 2
    flags: 3
"#;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("lume.yaml")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lume.yml")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lume.json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lume")),
            ConfigFormat::Json
        );
    }

    #[test]
    fn test_registry_from_json_str() {
        let registry =
            registry_from_str(SAMPLE_JSON, ConfigFormat::Json, "inline.json").unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("strip-a").is_some());
    }

    #[test]
    fn test_registry_from_yaml_str() {
        let registry =
            registry_from_str(SAMPLE_YAML, ConfigFormat::Yaml, "inline.yaml").unwrap();
        assert_eq!(registry.len(), 1);
        let device = registry.get("strip-a").unwrap();
        assert_eq!(device.slave, 128);
    }

    #[test]
    fn test_json_and_yaml_build_identical_registries() {
        let from_json =
            registry_from_str(SAMPLE_JSON, ConfigFormat::Json, "inline.json").unwrap();
        let from_yaml =
            registry_from_str(SAMPLE_YAML, ConfigFormat::Yaml, "inline.yaml").unwrap();
        assert_eq!(
            from_json.get("strip-a").unwrap(),
            from_yaml.get("strip-a").unwrap()
        );
    }

    #[test]
    fn test_load_registry_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

        let registry = load_registry(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_registry("/nonexistent/lume.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err =
            document_from_str("{not json", ConfigFormat::Json, "inline.json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
