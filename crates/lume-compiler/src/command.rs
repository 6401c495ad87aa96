// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Command documents and their validated effect plans.
//!
//! A [`Command`] is the raw input document as it arrives from a caller:
//! numeric fields are carried wide (`i64`) and optional, so range and
//! presence violations surface as LUME's own
//! [`CompileError`](lume_core::CompileError) taxonomy rather than as
//! deserializer failures. Validation turns a command into an
//! [`EffectPlan`], a closed enum whose variants carry only the fields
//! their mode needs; the compiler then matches exhaustively on the plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lume_core::error::{CompileError, CompileResult};
use lume_core::protocol::Effect;

// =============================================================================
// Command
// =============================================================================

/// One semantic command document, the per-element shape of an input
/// batch.
///
/// Fields not required by the selected mode are ignored even if present.
/// `fps` is accepted for input compatibility but consumed by no mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Target device identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Requested effect mode, one of the closed set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Global strip brightness. Required by every mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i64>,

    /// Palette selector. Required by every mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette_id: Option<i64>,

    /// Solid color triple, RGB channel order. Required by `solid_rgb`.
    #[serde(default, rename = "RGB", skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Vec<i64>>,

    /// Frame rate hint. Accepted and ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<i64>,

    /// Torch: spark ignition threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_spark_threshold: Option<i64>,

    /// Torch: horizontal energy adjacency coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_adj_h: Option<i64>,

    /// Torch: vertical energy adjacency coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_adj_v: Option<i64>,

    /// Torch: passive energy retention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_passive_retention: Option<i64>,

    /// Torch: spark energy transfer rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_spark_transfer: Option<i64>,

    /// Torch: spark energy retention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_spark_retention: Option<i64>,

    /// Torch: color coefficient triple, RGB channel order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_color_coeff: Option<Vec<i64>>,

    /// Noise: animation speed step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_speed_step: Option<i64>,

    /// Noise: spatial scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_scale: Option<i64>,
}

impl Command {
    /// Returns the target device id, failing if absent.
    pub fn device_id(&self) -> CompileResult<&str> {
        self.id
            .as_deref()
            .ok_or_else(|| CompileError::missing_field("id", "command"))
    }

    /// Parses the requested mode, failing with `InvalidMode` on any
    /// string outside the closed set and `MissingField` when absent.
    pub fn effect_mode(&self) -> CompileResult<EffectMode> {
        match self.mode.as_deref() {
            Some(mode) => mode.parse(),
            None => Err(CompileError::missing_field("mode", "command")),
        }
    }

    /// Validates the brightness field as an 8-bit scalar.
    pub fn brightness(&self) -> CompileResult<u8> {
        required_u8("brightness", self.brightness)
    }

    /// Validates the palette id field as an 8-bit scalar.
    pub fn palette_id(&self) -> CompileResult<u8> {
        required_u8("palette_id", self.palette_id)
    }

    /// Validates the mode-specific fields into an [`EffectPlan`].
    ///
    /// Validation is eager and fail-fast, in the mode's declared field
    /// order; the first violated invariant aborts the plan.
    pub fn effect_plan(&self) -> CompileResult<EffectPlan> {
        match self.effect_mode()? {
            EffectMode::Off => Ok(EffectPlan::Off),
            EffectMode::SolidRgb => Ok(EffectPlan::SolidRgb {
                rgb: required_triple("RGB", self.rgb.as_deref())?,
            }),
            EffectMode::FxFire => Ok(EffectPlan::FxFire),
            EffectMode::FxTorch => Ok(EffectPlan::FxTorch(TorchParams {
                spark_threshold: required_u8(
                    "torch_spark_threshold",
                    self.torch_spark_threshold,
                )?,
                adj_h: required_u8("torch_adj_h", self.torch_adj_h)?,
                adj_v: required_u8("torch_adj_v", self.torch_adj_v)?,
                passive_retention: required_u8(
                    "torch_passive_retention",
                    self.torch_passive_retention,
                )?,
                spark_transfer: required_u8("torch_spark_transfer", self.torch_spark_transfer)?,
                spark_retention: required_u8(
                    "torch_spark_retention",
                    self.torch_spark_retention,
                )?,
                color_coeff: required_triple(
                    "torch_color_coeff",
                    self.torch_color_coeff.as_deref(),
                )?,
            })),
            EffectMode::FxNoise => Ok(EffectPlan::FxNoise(NoiseParams {
                speed_step: required_u8("noise_speed_step", self.noise_speed_step)?,
                scale: required_u8("noise_scale", self.noise_scale)?,
            })),
        }
    }
}

// =============================================================================
// EffectMode
// =============================================================================

/// The closed set of wire mode strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMode {
    /// Strip off.
    Off,
    /// Solid color fill.
    SolidRgb,
    /// Fire effect.
    FxFire,
    /// Torch effect.
    FxTorch,
    /// Noise effect.
    FxNoise,
}

impl EffectMode {
    /// All modes, in wire order.
    pub const ALL: [EffectMode; 5] = [
        Self::Off,
        Self::SolidRgb,
        Self::FxFire,
        Self::FxTorch,
        Self::FxNoise,
    ];

    /// Returns the wire string for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::SolidRgb => "solid_rgb",
            Self::FxFire => "fx_fire",
            Self::FxTorch => "fx_torch",
            Self::FxNoise => "fx_noise",
        }
    }

    /// Returns the effect selector this mode programs into the flags
    /// register.
    pub const fn effect(self) -> Effect {
        match self {
            Self::Off => Effect::None,
            Self::SolidRgb => Effect::Static,
            Self::FxFire => Effect::Fire,
            Self::FxTorch => Effect::Torch,
            Self::FxNoise => Effect::Noise,
        }
    }
}

impl FromStr for EffectMode {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CompileError::invalid_mode(s))
    }
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// EffectPlan
// =============================================================================

/// A fully validated command plan.
///
/// Each variant carries only the fields its mode needs, so "field
/// required by mode X" is enforced by construction rather than looked up
/// at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectPlan {
    /// Turn the strip off.
    Off,
    /// Fill the strip with a solid color.
    SolidRgb {
        /// Validated color triple, still in RGB channel order.
        rgb: [u8; 3],
    },
    /// Enable the fire effect.
    FxFire,
    /// Enable the torch effect with tuning parameters.
    FxTorch(TorchParams),
    /// Enable the noise effect with tuning parameters.
    FxNoise(NoiseParams),
}

/// Validated torch effect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorchParams {
    /// Spark ignition threshold.
    pub spark_threshold: u8,
    /// Horizontal energy adjacency coefficient.
    pub adj_h: u8,
    /// Vertical energy adjacency coefficient.
    pub adj_v: u8,
    /// Passive energy retention.
    pub passive_retention: u8,
    /// Spark energy transfer rate.
    pub spark_transfer: u8,
    /// Spark energy retention.
    pub spark_retention: u8,
    /// Color coefficient triple, RGB channel order.
    pub color_coeff: [u8; 3],
}

/// Validated noise effect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseParams {
    /// Animation speed step.
    pub speed_step: u8,
    /// Spatial scale.
    pub scale: u8,
}

// =============================================================================
// Validation Helpers
// =============================================================================

/// Validates a required field as an unsigned 8-bit scalar.
fn required_u8(field: &str, value: Option<i64>) -> CompileResult<u8> {
    let value = value.ok_or_else(|| CompileError::missing_field(field, "command"))?;
    u8::try_from(value)
        .map_err(|_| CompileError::value_range(field, value, 0, i64::from(u8::MAX)))
}

/// Validates a required field as a 3-element array of 8-bit scalars.
///
/// Fails fast on the first out-of-range element, reporting the offending
/// value.
fn required_triple(field: &str, value: Option<&[i64]>) -> CompileResult<[u8; 3]> {
    let values = value.ok_or_else(|| CompileError::missing_field(field, "command"))?;
    if values.len() != 3 {
        return Err(CompileError::value_range(field, values.len() as i64, 3, 3));
    }
    let mut out = [0u8; 3];
    for (slot, &raw) in out.iter_mut().zip(values) {
        *slot = u8::try_from(raw)
            .map_err(|_| CompileError::value_range(field, raw, 0, i64::from(u8::MAX)))?;
    }
    Ok(out)
}

// =============================================================================
// Tests
// =============================================================================
