// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `validate` command.

use crate::cli::{Cli, OutputFormat, ValidateArgs};
use crate::error::{BinError, BinResult};

/// Executes the `validate` command to validate configuration.
pub fn validate(cli: &Cli, args: ValidateArgs) -> BinResult<()> {
    let config_path = &cli.config;

    if !config_path.exists() {
        return Err(BinError::Configuration(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let registry = lume_config::load_registry(config_path)?;

    let mut warnings: Vec<String> = Vec::new();
    if registry.is_empty() {
        warnings.push("No devices configured".to_string());
    }
    for device in registry.iter() {
        if !device.registers.contains(lume_core::protocol::Register::Flags) {
            warnings.push(format!(
                "Device '{}' has no flags register; no effect mode can be compiled for it",
                device.id
            ));
        }
    }

    match args.format {
        OutputFormat::Text => {
            println!("✓ Configuration is valid: {}", config_path.display());
            println!();
            println!("Summary:");
            println!("  Devices: {}", registry.len());
            for device in registry.iter() {
                println!(
                    "  - {} (slave {} on {}, {} px, mmap '{}', {} registers)",
                    device.id,
                    device.slave,
                    device.location,
                    device.strip_size,
                    device.mmap_id,
                    device.registers.len()
                );
            }

            if !warnings.is_empty() {
                println!();
                println!("Warnings:");
                for warning in &warnings {
                    println!("  ⚠ {}", warning);
                }
            }

            if args.show_config {
                println!();
                println!("Parsed registry:");
                println!(
                    "{}",
                    serde_json::to_string_pretty(&registry)
                        .unwrap_or_else(|_| "(serialization error)".to_string())
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": true,
                "config_path": config_path.display().to_string(),
                "device_count": registry.len(),
                "device_ids": registry.device_ids(),
                "warnings": warnings,
                "registry": if args.show_config { Some(&registry) } else { None },
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .unwrap_or_else(|_| "(serialization error)".to_string())
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use clap::Parser;

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["lume", "-c", "/nonexistent/lume.json"]);
        let err = validate(&cli, ValidateArgs::default()).unwrap_err();
        assert!(matches!(err, BinError::Configuration(_)));
    }

    #[test]
    fn test_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"{
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
                    "ws2812_v1": { "brightness": 0, "palette_id": 1, "rgb": 2, "flags": 3 }
                }
            }"#,
        )
        .unwrap();

        let cli = Cli::parse_from(["lume", "-c", file.path().to_str().unwrap()]);
        validate(&cli, ValidateArgs::default()).unwrap();
    }
}
