// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `compile` command.
//!
//! Reads a JSON array of commands, compiles it against the configured
//! registry, and writes the compiled instruction batches to stdout. A
//! single failing command fails the whole batch with a nonzero exit.

use std::io::Read;

use lume_compiler::{compile_batch, Command};

use crate::cli::{Cli, CompileArgs};
use crate::error::{BinError, BinResult};

/// Executes the `compile` command.
pub fn compile(cli: &Cli, args: CompileArgs) -> BinResult<()> {
    let registry = lume_config::load_registry(&cli.config)?;

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let commands: Vec<Command> = serde_json::from_str(&text)
        .map_err(|e| BinError::input(format!("invalid command batch: {e}")))?;
    if commands.is_empty() {
        return Err(BinError::input("command batch is empty"));
    }

    let batches = compile_batch(&registry, &commands)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&batches)
    } else {
        serde_json::to_string(&batches)
    }
    .map_err(|e| BinError::runtime(format!("failed to serialize output: {e}")))?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use clap::Parser;

    const CONFIG_JSON: &str = r#"{
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

    const BATCH_JSON: &str = r#"[
        {
            "id": "strip-a",
            "mode": "solid_rgb",
            "brightness": 10,
            "palette_id": 1,
            "RGB": [1, 2, 3]
        }
    ]"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn cli_for(config: &std::path::Path) -> Cli {
        Cli::parse_from(["lume", "-c", config.to_str().unwrap()])
    }

    #[test]
    fn test_compile_batch_file() {
        let config = write_temp(".json", CONFIG_JSON);
        let batch = write_temp(".json", BATCH_JSON);
        let args = CompileArgs {
            input: Some(batch.path().to_path_buf()),
            pretty: false,
        };
        compile(&cli_for(config.path()), args).unwrap();
    }

    #[test]
    fn test_missing_batch_file() {
        let config = write_temp(".json", CONFIG_JSON);
        let args = CompileArgs {
            input: Some(PathBuf::from("/nonexistent/batch.json")),
            pretty: false,
        };
        let err = compile(&cli_for(config.path()), args).unwrap_err();
        assert!(matches!(err, BinError::Io(_)));
    }

    #[test]
    fn test_malformed_batch_is_input_error() {
        let config = write_temp(".json", CONFIG_JSON);
        let batch = write_temp(".json", "{not json");
        let args = CompileArgs {
            input: Some(batch.path().to_path_buf()),
            pretty: false,
        };
        let err = compile(&cli_for(config.path()), args).unwrap_err();
        assert!(matches!(err, BinError::Input(_)));
    }

    #[test]
    fn test_unknown_device_is_compile_error() {
        let config = write_temp(".json", CONFIG_JSON);
        let batch = write_temp(
            ".json",
            r#"[{"id": "strip-z", "mode": "off", "brightness": 0, "palette_id": 0}]"#,
        );
        let args = CompileArgs {
            input: Some(batch.path().to_path_buf()),
            pretty: false,
        };
        let err = compile(&cli_for(config.path()), args).unwrap_err();
        assert!(matches!(err, BinError::Compile(_)));
    }
}
