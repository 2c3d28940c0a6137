use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::components::curve::{CurveDefinition, CurveError};
use crate::components::glider::config::GliderStartConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
    #[error("Missing response curve: {0}")]
    MissingCurve(CurveName),
    #[error("Invalid response curve {name}: {source}")]
    InvalidCurve {
        name: CurveName,
        #[source]
        source: CurveError,
    },
    #[error("Invalid glider configuration: {0}")]
    ValidationError(String),
}

/// Every response curve the flight model queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveName {
    MaxPitchByVelocity,
    NeutralPitchByVelocity,
    NeutralPitchByRoll,
    PitchInputSlewByAmountToLimit,
    PitchSlewByAmountToLimit,
    RollInputSlewByAmountToLimit,
    RollSlewByAmountToLimit,
    DeltaYawByRoll,
    DeltaVelocityByVerticalVelocity,
}

impl CurveName {
    pub const ALL: [CurveName; 9] = [
        CurveName::MaxPitchByVelocity,
        CurveName::NeutralPitchByVelocity,
        CurveName::NeutralPitchByRoll,
        CurveName::PitchInputSlewByAmountToLimit,
        CurveName::PitchSlewByAmountToLimit,
        CurveName::RollInputSlewByAmountToLimit,
        CurveName::RollSlewByAmountToLimit,
        CurveName::DeltaYawByRoll,
        CurveName::DeltaVelocityByVerticalVelocity,
    ];

    /// Key used for this curve in config files.
    pub fn key(&self) -> &'static str {
        match self {
            CurveName::MaxPitchByVelocity => "max_pitch_by_velocity",
            CurveName::NeutralPitchByVelocity => "neutral_pitch_by_velocity",
            CurveName::NeutralPitchByRoll => "neutral_pitch_by_roll",
            CurveName::PitchInputSlewByAmountToLimit => "pitch_input_slew_by_amount_to_limit",
            CurveName::PitchSlewByAmountToLimit => "pitch_slew_by_amount_to_limit",
            CurveName::RollInputSlewByAmountToLimit => "roll_input_slew_by_amount_to_limit",
            CurveName::RollSlewByAmountToLimit => "roll_slew_by_amount_to_limit",
            CurveName::DeltaYawByRoll => "delta_yaw_by_roll",
            CurveName::DeltaVelocityByVerticalVelocity => "delta_velocity_by_vertical_velocity",
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Glider configuration as it appears on disk.
///
/// Everything is optional here; [`GliderConfig::from_raw_config`] fills scalar
/// gaps from the arcade preset and rejects missing curves.
///
/// [`GliderConfig::from_raw_config`]: crate::components::GliderConfig::from_raw_config
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGliderConfig {
    pub name: Option<String>,

    #[serde(default)]
    pub curves: RawGliderCurves,

    /// Pitch
    pub min_pitch: Option<f64>,
    pub pitch_no_input_slew: Option<f64>,

    /// Roll
    pub max_roll: Option<f64>,
    pub roll_no_input_slew: Option<f64>,

    /// Velocity
    pub velocity_scale: Option<f64>,
    pub gravity: Option<f64>,

    /// Thermals
    pub thermal_lift_max_velocity: Option<f64>,
    pub thermal_lift_acceleration: Option<f64>,

    pub start: Option<GliderStartConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGliderCurves {
    pub max_pitch_by_velocity: Option<CurveDefinition>,
    pub neutral_pitch_by_velocity: Option<CurveDefinition>,
    pub neutral_pitch_by_roll: Option<CurveDefinition>,
    pub pitch_input_slew_by_amount_to_limit: Option<CurveDefinition>,
    pub pitch_slew_by_amount_to_limit: Option<CurveDefinition>,
    pub roll_input_slew_by_amount_to_limit: Option<CurveDefinition>,
    pub roll_slew_by_amount_to_limit: Option<CurveDefinition>,
    pub delta_yaw_by_roll: Option<CurveDefinition>,
    pub delta_velocity_by_vertical_velocity: Option<CurveDefinition>,
}

impl RawGliderCurves {
    /// Takes the definition stored under `name`, leaving `None` behind.
    pub fn take(&mut self, name: CurveName) -> Option<CurveDefinition> {
        match name {
            CurveName::MaxPitchByVelocity => self.max_pitch_by_velocity.take(),
            CurveName::NeutralPitchByVelocity => self.neutral_pitch_by_velocity.take(),
            CurveName::NeutralPitchByRoll => self.neutral_pitch_by_roll.take(),
            CurveName::PitchInputSlewByAmountToLimit => {
                self.pitch_input_slew_by_amount_to_limit.take()
            }
            CurveName::PitchSlewByAmountToLimit => self.pitch_slew_by_amount_to_limit.take(),
            CurveName::RollInputSlewByAmountToLimit => {
                self.roll_input_slew_by_amount_to_limit.take()
            }
            CurveName::RollSlewByAmountToLimit => self.roll_slew_by_amount_to_limit.take(),
            CurveName::DeltaYawByRoll => self.delta_yaw_by_roll.take(),
            CurveName::DeltaVelocityByVerticalVelocity => {
                self.delta_velocity_by_vertical_velocity.take()
            }
        }
    }
}
