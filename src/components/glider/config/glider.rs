use bevy::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::components::curve::{PiecewiseLinearCurve, ResponseCurve};
use crate::components::glider::config::{
    ConfigError, CurveName, GliderStartConfig, RawGliderConfig, RawGliderCurves,
};
use crate::utils::{
    DEFAULT_THERMAL_LIFT_ACCELERATION, DEFAULT_THERMAL_LIFT_MAX_VELOCITY, DEFAULT_VELOCITY_SCALE,
};

/// Shared handle to an injected response curve.
pub type CurveHandle = Arc<dyn ResponseCurve>;

/// The response curves that shape the flight model.
#[derive(Debug, Clone)]
pub struct GliderCurves {
    /// Pitch ceiling (deg) by normalised velocity.
    pub max_pitch_by_velocity: CurveHandle,
    /// Resting pitch (deg) by normalised velocity.
    pub neutral_pitch_by_velocity: CurveHandle,
    /// Resting pitch offset (deg) by absolute roll.
    pub neutral_pitch_by_roll: CurveHandle,
    /// Slew rate of the pitch target by distance to the active limit.
    pub pitch_input_slew_by_amount_to_limit: CurveHandle,
    /// Slew rate of pitch by distance to the active limit.
    pub pitch_slew_by_amount_to_limit: CurveHandle,
    /// Slew rate of the roll target by distance to the active limit.
    pub roll_input_slew_by_amount_to_limit: CurveHandle,
    /// Slew rate of roll by distance to the active limit.
    pub roll_slew_by_amount_to_limit: CurveHandle,
    /// Turn rate (deg/s) by absolute roll.
    pub delta_yaw_by_roll: CurveHandle,
    /// Airspeed change per second by vertical velocity.
    pub delta_velocity_by_vertical_velocity: CurveHandle,
}

impl GliderCurves {
    pub fn get(&self, name: CurveName) -> &CurveHandle {
        match name {
            CurveName::MaxPitchByVelocity => &self.max_pitch_by_velocity,
            CurveName::NeutralPitchByVelocity => &self.neutral_pitch_by_velocity,
            CurveName::NeutralPitchByRoll => &self.neutral_pitch_by_roll,
            CurveName::PitchInputSlewByAmountToLimit => &self.pitch_input_slew_by_amount_to_limit,
            CurveName::PitchSlewByAmountToLimit => &self.pitch_slew_by_amount_to_limit,
            CurveName::RollInputSlewByAmountToLimit => &self.roll_input_slew_by_amount_to_limit,
            CurveName::RollSlewByAmountToLimit => &self.roll_slew_by_amount_to_limit,
            CurveName::DeltaYawByRoll => &self.delta_yaw_by_roll,
            CurveName::DeltaVelocityByVerticalVelocity => {
                &self.delta_velocity_by_vertical_velocity
            }
        }
    }

    fn from_raw(mut raw: RawGliderCurves) -> Result<Self, ConfigError> {
        let mut take = |name: CurveName| -> Result<CurveHandle, ConfigError> {
            let definition = raw.take(name).ok_or(ConfigError::MissingCurve(name))?;
            let curve = PiecewiseLinearCurve::try_from(definition)
                .map_err(|source| ConfigError::InvalidCurve { name, source })?;
            Ok(Arc::new(curve))
        };

        Ok(Self {
            max_pitch_by_velocity: take(CurveName::MaxPitchByVelocity)?,
            neutral_pitch_by_velocity: take(CurveName::NeutralPitchByVelocity)?,
            neutral_pitch_by_roll: take(CurveName::NeutralPitchByRoll)?,
            pitch_input_slew_by_amount_to_limit: take(CurveName::PitchInputSlewByAmountToLimit)?,
            pitch_slew_by_amount_to_limit: take(CurveName::PitchSlewByAmountToLimit)?,
            roll_input_slew_by_amount_to_limit: take(CurveName::RollInputSlewByAmountToLimit)?,
            roll_slew_by_amount_to_limit: take(CurveName::RollSlewByAmountToLimit)?,
            delta_yaw_by_roll: take(CurveName::DeltaYawByRoll)?,
            delta_velocity_by_vertical_velocity: take(
                CurveName::DeltaVelocityByVerticalVelocity,
            )?,
        })
    }

    fn arcade() -> Self {
        Self {
            max_pitch_by_velocity: preset_curve(&[(0.0, 5.0), (0.5, 25.0), (1.0, 45.0)]),
            neutral_pitch_by_velocity: preset_curve(&[
                (0.0, -30.0),
                (0.3, -10.0),
                (0.6, -5.0),
                (1.0, 0.0),
            ]),
            neutral_pitch_by_roll: preset_curve(&[(0.0, 0.0), (60.0, -15.0)]),
            pitch_input_slew_by_amount_to_limit: preset_curve(&[
                (0.0, 0.5),
                (10.0, 3.0),
                (60.0, 4.0),
            ]),
            pitch_slew_by_amount_to_limit: preset_curve(&[(0.0, 1.0), (10.0, 4.0), (60.0, 5.0)]),
            roll_input_slew_by_amount_to_limit: preset_curve(&[
                (0.0, 0.5),
                (20.0, 3.0),
                (120.0, 4.0),
            ]),
            roll_slew_by_amount_to_limit: preset_curve(&[(0.0, 1.0), (20.0, 4.0), (120.0, 5.0)]),
            delta_yaw_by_roll: preset_curve(&[(0.0, 0.0), (30.0, 30.0), (60.0, 60.0)]),
            delta_velocity_by_vertical_velocity: preset_curve(&[
                (-1.0, 0.3),
                (0.0, 0.0),
                (1.0, -0.3),
            ]),
        }
    }

    fn trainer() -> Self {
        Self {
            max_pitch_by_velocity: preset_curve(&[(0.0, 5.0), (1.0, 25.0)]),
            neutral_pitch_by_roll: preset_curve(&[(0.0, 0.0), (35.0, -8.0)]),
            roll_input_slew_by_amount_to_limit: preset_curve(&[(0.0, 0.3), (70.0, 2.0)]),
            delta_yaw_by_roll: preset_curve(&[(0.0, 0.0), (35.0, 20.0)]),
            ..Self::arcade()
        }
    }
}

/// Built-in curves are authored with sorted keys.
fn preset_curve(points: &[(f64, f64)]) -> CurveHandle {
    Arc::new(PiecewiseLinearCurve::from_sorted_keys(points))
}

/// Built-in tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GliderPreset {
    /// Responsive, steep turns.
    Arcade,
    /// Shallow bank limit and gentle pitch authority.
    Trainer,
}

/// Source for glider configuration.
/// Can either be a built-in preset (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum GliderSource {
    Programmed(GliderPreset),
    File(PathBuf),
}

/// Complete, validated tuning of a glider.
///
/// Immutable once built; re-tuning means building a new config.
#[derive(Component, Debug, Clone)]
pub struct GliderConfig {
    /// Name of the glider, defaults to the preset name.
    pub name: String,
    pub curves: GliderCurves,
    /// Pitch floor (deg).
    pub min_pitch: f64,
    /// Rate at which the pitch target relaxes to neutral with no input.
    pub pitch_no_input_slew: f64,
    /// Bank limit (deg), symmetric.
    pub max_roll: f64,
    /// Rate at which the roll target relaxes to level with no input.
    pub roll_no_input_slew: f64,
    /// World distance per second at full normalised airspeed.
    pub velocity_scale: f64,
    /// Airspeed lost per second per unit signed-square of pitch sine.
    pub gravity: f64,
    /// Thermal lift ceiling (world distance per second).
    pub thermal_lift_max_velocity: f64,
    /// Thermal lift change per second while entering or leaving thermals.
    pub thermal_lift_acceleration: f64,
    pub start: GliderStartConfig,
}

impl Default for GliderConfig {
    /// The `Arcade` preset is chosen as the default for convenience.
    fn default() -> Self {
        Self::arcade()
    }
}

impl GliderConfig {
    /// Creates a new glider configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `GliderSource` specifying a built-in preset (`Programmed`) or a
    ///              config file (`File`).
    pub fn new(source: GliderSource) -> Result<Self, ConfigError> {
        match source {
            GliderSource::Programmed(preset) => Ok(Self::from_programmed(preset)),
            GliderSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(preset: GliderPreset) -> Self {
        match preset {
            GliderPreset::Arcade => Self {
                name: "Arcade".to_string(),
                curves: GliderCurves::arcade(),
                min_pitch: -60.0,
                pitch_no_input_slew: 1.0,
                max_roll: 60.0,
                roll_no_input_slew: 1.5,
                velocity_scale: DEFAULT_VELOCITY_SCALE,
                gravity: 0.2,
                thermal_lift_max_velocity: DEFAULT_THERMAL_LIFT_MAX_VELOCITY,
                thermal_lift_acceleration: DEFAULT_THERMAL_LIFT_ACCELERATION,
                start: GliderStartConfig::default(),
            },
            GliderPreset::Trainer => Self {
                name: "Trainer".to_string(),
                curves: GliderCurves::trainer(),
                min_pitch: -35.0,
                pitch_no_input_slew: 1.5,
                max_roll: 35.0,
                roll_no_input_slew: 2.0,
                velocity_scale: 2500.0,
                gravity: 0.15,
                thermal_lift_max_velocity: DEFAULT_THERMAL_LIFT_MAX_VELOCITY,
                thermal_lift_acceleration: DEFAULT_THERMAL_LIFT_ACCELERATION,
                start: GliderStartConfig::default(),
            },
        }
    }

    /// Reads a configuration file, YAML or JSON by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let raw_config: RawGliderConfig = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&file_contents)?,
            Some("json") => serde_json::from_str(&file_contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        info!("Loaded glider config from {}", path.display());
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw configuration into a validated glider configuration.
    ///
    /// Scalars left out of `raw` take their `Arcade` values; curves are required.
    pub fn from_raw_config(raw: RawGliderConfig) -> Result<Self, ConfigError> {
        let defaults = Self::arcade();
        let config = Self {
            name: raw.name.unwrap_or_else(|| "Custom".to_string()),
            curves: GliderCurves::from_raw(raw.curves)?,
            min_pitch: raw.min_pitch.unwrap_or(defaults.min_pitch),
            pitch_no_input_slew: raw
                .pitch_no_input_slew
                .unwrap_or(defaults.pitch_no_input_slew),
            max_roll: raw.max_roll.unwrap_or(defaults.max_roll),
            roll_no_input_slew: raw.roll_no_input_slew.unwrap_or(defaults.roll_no_input_slew),
            velocity_scale: raw.velocity_scale.unwrap_or(defaults.velocity_scale),
            gravity: raw.gravity.unwrap_or(defaults.gravity),
            thermal_lift_max_velocity: raw
                .thermal_lift_max_velocity
                .unwrap_or(defaults.thermal_lift_max_velocity),
            thermal_lift_acceleration: raw
                .thermal_lift_acceleration
                .unwrap_or(defaults.thermal_lift_acceleration),
            start: raw.start.unwrap_or(defaults.start),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the scalar tuning. Curves are validated when they are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("min_pitch", self.min_pitch),
            ("pitch_no_input_slew", self.pitch_no_input_slew),
            ("max_roll", self.max_roll),
            ("roll_no_input_slew", self.roll_no_input_slew),
            ("velocity_scale", self.velocity_scale),
            ("gravity", self.gravity),
            ("thermal_lift_max_velocity", self.thermal_lift_max_velocity),
            ("thermal_lift_acceleration", self.thermal_lift_acceleration),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.max_roll <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_roll must be positive, got {}",
                self.max_roll
            )));
        }
        let non_negative = [
            ("pitch_no_input_slew", self.pitch_no_input_slew),
            ("roll_no_input_slew", self.roll_no_input_slew),
            ("velocity_scale", self.velocity_scale),
            ("thermal_lift_max_velocity", self.thermal_lift_max_velocity),
            ("thermal_lift_acceleration", self.thermal_lift_acceleration),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }
        if !self.start.is_valid() {
            return Err(ConfigError::ValidationError(format!(
                "invalid start configuration: {:?}",
                self.start
            )));
        }
        Ok(())
    }

    pub fn arcade() -> Self {
        Self::from_programmed(GliderPreset::Arcade)
    }

    pub fn trainer() -> Self {
        Self::from_programmed(GliderPreset::Trainer)
    }
}
