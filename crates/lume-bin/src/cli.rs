// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! This module provides the command-line interface for LUME using clap.
//! It supports multiple subcommands for different operations:
//!
//! - `serve`: Start the compile API server (default)
//! - `compile`: Compile a command batch file to instructions
//! - `validate`: Validate the device configuration file
//! - `version`: Show version information

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// LUME - Lighting Unit Modbus Encoder
///
/// Compiles semantic lighting commands into ordered register write
/// instructions for addressable fixtures on a Modbus-style bus.
#[derive(Parser, Debug)]
#[command(
    name = "lume",
    author = "Sylvex <contact@sylvex.io>",
    version = lume_core::VERSION,
    about = "Lighting Unit Modbus Encoder",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "lume.yaml",
        env = "LUME_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        env = "LUME_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json, compact)
    #[arg(long, default_value = "text", env = "LUME_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Enable quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the LUME CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the compile API server
    ///
    /// This is the default command when no subcommand is specified.
    /// It loads the device registry and serves the compile endpoint.
    Serve(ServeArgs),

    /// Compile a command batch to instructions
    ///
    /// Reads a JSON array of commands from a file or stdin, compiles it
    /// against the configured device registry, and writes the instruction
    /// batches as JSON to stdout.
    Compile(CompileArgs),

    /// Validate the configuration file
    ///
    /// Parses and validates the device configuration without starting
    /// the server. Useful for checking configuration before deployment.
    Validate(ValidateArgs),

    /// Show detailed version information
    Version,
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Arguments for the `serve` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Address to bind to (overrides the default)
    #[arg(long, env = "LUME_BIND_ADDRESS")]
    pub bind: Option<IpAddr>,

    /// Port to listen on (overrides the default)
    #[arg(short, long, env = "LUME_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the `compile` command.
#[derive(Args, Debug, Default, Clone)]
pub struct CompileArgs {
    /// Command batch file (JSON array); reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ValidateArgs {
    /// Show the parsed device registry after validation
    #[arg(short, long)]
    pub show_config: bool,

    /// Output format for validation results
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
    /// Compact format for minimal output
    Compact,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic parsing
    Json,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective command, defaulting to `Serve` if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Serve(ServeArgs::default()))
    }

    /// Get the effective log level based on flags.
    pub fn effective_log_level(&self) -> &str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
