// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `version` command.

use crate::cli::Cli;
use crate::error::BinResult;

/// Executes the `version` command to display version information.
pub fn version(_cli: &Cli) -> BinResult<()> {
    println!("LUME - Lighting Unit Modbus Encoder");
    println!();
    println!("Version Information:");
    println!("  lume-bin:      {}", env!("CARGO_PKG_VERSION"));
    println!("  lume-core:     {}", lume_core::VERSION);
    println!("  lume-config:   {}", lume_config::VERSION);
    println!("  lume-compiler: {}", lume_compiler::VERSION);
    println!("  lume-api:      {}", lume_api::VERSION);
    println!();
    println!("Build Information:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
    println!();
    println!("License: PolyForm Noncommercial License 1.0.0");
    println!("Copyright (c) 2025 Sylvex. All rights reserved.");

    Ok(())
}
