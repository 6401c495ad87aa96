// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The command-to-instruction compiler.
//!
//! Compilation is pure and stateless: every invocation independently
//! re-derives the full instruction set for the requested mode from the
//! registry and the command, with no diffing against prior state. The
//! per-command output order is a protocol contract:
//!
//! 1. brightness
//! 2. palette_id
//! 3. mode-specific parameter writes (declared field order)
//! 4. flags (always terminal, so the fixture applies parameters before
//!    switching effect)

use tracing::debug;

use lume_core::device::DeviceRegistry;
use lume_core::error::{CompileError, CompileResult};
use lume_core::instruction::CompiledBatch;
use lume_core::protocol::{Register, MAX_STRIP_PIXELS};

use crate::command::{Command, EffectPlan};
use crate::encoder::{rgb_to_grb, solid_fill, InstructionEncoder};

/// Comment tag shared by the chunks of a solid color fill.
const COMMENT_RGB_FILL: &str = "rgb";

/// Comment tag of the torch color coefficient write.
const COMMENT_COLOR_COEFF: &str = "RGB coeff";

// =============================================================================
// Compilation
// =============================================================================

/// Compiles one semantic command into its ordered instruction batch.
///
/// Validation is eager and fail-fast: the first violated invariant
/// aborts the compilation and no partial instruction list is produced.
pub fn compile(registry: &DeviceRegistry, command: &Command) -> CompileResult<CompiledBatch> {
    let device_id = command.device_id()?;
    let device = registry.require(device_id)?;
    let mode = command.effect_mode()?;

    let encoder = InstructionEncoder::new(device);
    let mut payload = Vec::new();

    // Common prologue: brightness and palette are required and written
    // for every mode, including `off`.
    payload.push(encoder.write_u8(Register::Brightness, command.brightness()?)?);
    payload.push(encoder.write_u8(Register::PaletteId, command.palette_id()?)?);

    let plan = command.effect_plan()?;
    match &plan {
        EffectPlan::Off | EffectPlan::FxFire => {}
        EffectPlan::SolidRgb { rgb } => {
            // Registry construction enforces this bound, but devices can
            // also be built directly; reject before allocating the fill.
            if device.strip_size > MAX_STRIP_PIXELS {
                return Err(CompileError::value_range(
                    "strip_size",
                    i64::try_from(device.strip_size).unwrap_or(i64::MAX),
                    1,
                    MAX_STRIP_PIXELS as i64,
                ));
            }
            let fill = solid_fill(rgb_to_grb(*rgb), device.strip_size);
            payload.extend(encoder.write_bytes(Register::Rgb, &fill, COMMENT_RGB_FILL)?);
        }
        EffectPlan::FxTorch(params) => {
            payload.push(
                encoder.write_u8(Register::TorchSparkThreshold, params.spark_threshold)?,
            );
            payload.push(encoder.write_u8(Register::TorchAdjH, params.adj_h)?);
            payload.push(encoder.write_u8(Register::TorchAdjV, params.adj_v)?);
            payload.push(
                encoder.write_u8(Register::TorchPassiveRetention, params.passive_retention)?,
            );
            payload.push(encoder.write_u8(Register::TorchSparkTransfer, params.spark_transfer)?);
            payload
                .push(encoder.write_u8(Register::TorchSparkRetention, params.spark_retention)?);
            payload.extend(encoder.write_bytes(
                Register::TorchColorCoeff,
                &rgb_to_grb(params.color_coeff),
                COMMENT_COLOR_COEFF,
            )?);
        }
        EffectPlan::FxNoise(params) => {
            payload.push(encoder.write_u8(Register::NoiseSpeedStep, params.speed_step)?);
            payload.push(encoder.write_u8(Register::NoiseScale, params.scale)?);
        }
    }

    // The flags write is always the terminal instruction.
    payload.push(encoder.write_flags(mode.effect())?);

    debug!(
        device = device_id,
        mode = %mode,
        instructions = payload.len(),
        "command compiled"
    );

    Ok(CompiledBatch {
        id: device_id.to_string(),
        service: device.service_target(),
        payload,
    })
}

/// Compiles an ordered batch of commands, preserving input order.
///
/// The batch aborts on the first command that fails to compile and no
/// partial output is returned. This matches the dispatcher contract the
/// fixtures were deployed against; callers wanting per-command isolation
/// can invoke [`compile`] per command and collect results themselves.
pub fn compile_batch(
    registry: &DeviceRegistry,
    commands: &[Command],
) -> CompileResult<Vec<CompiledBatch>> {
    let mut batches = Vec::with_capacity(commands.len());
    for command in commands {
        batches.push(compile(registry, command)?);
    }
    Ok(batches)
}

// =============================================================================
// Tests
// =============================================================================
