use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::glider::config::GliderStartConfig;
use crate::utils::{wrap_degrees, MAX_VELOCITY, MIN_VELOCITY};

/// Flight state of a glider, advanced once per frame.
///
/// Angles are in degrees, velocity is normalised to `[0.01, 1.0]`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GliderState {
    pub pitch: f64,
    /// Smoothed pitch target derived from input.
    pub slewed_input_pitch: f64,
    /// Resting pitch for the current velocity and roll, recomputed every frame.
    pub neutral_pitch: f64,
    pub roll: f64,
    /// Smoothed roll target derived from input.
    pub slewed_input_roll: f64,
    /// Heading, wrapped to `[0, 360)`.
    pub yaw: f64,
    pub velocity: f64,
    /// Upward speed gained from thermals.
    pub thermal_lift: f64,
}

impl Default for GliderState {
    /// Level flight, heading north at half airspeed.
    fn default() -> Self {
        Self::from_start(&GliderStartConfig::default())
    }
}

impl GliderState {
    pub fn from_start(start: &GliderStartConfig) -> Self {
        Self {
            pitch: 0.0,
            slewed_input_pitch: 0.0,
            neutral_pitch: 0.0,
            roll: 0.0,
            slewed_input_roll: 0.0,
            yaw: wrap_degrees(start.heading),
            velocity: start.velocity.clamp(MIN_VELOCITY, MAX_VELOCITY),
            thermal_lift: 0.0,
        }
    }

    /// Diagnostic text for tuning overlays.
    pub fn debug_string(&self) -> String {
        format!("Velocity: {:.6}\nPitch: {:.6}", self.velocity, self.pitch)
    }
}

/// Latched input axes, both kept within `[-1, 1]`.
///
/// Positive `up` pushes the nose down, negative pulls it up.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GliderControls {
    up_axis: f64,
    right_axis: f64,
}

impl GliderControls {
    pub fn new(up_axis: f64, right_axis: f64) -> Self {
        let mut controls = Self::default();
        controls.set_up_axis(up_axis);
        controls.set_right_axis(right_axis);
        controls
    }

    pub fn set_up_axis(&mut self, value: f64) {
        self.up_axis = clamp_axis(value);
    }

    pub fn set_right_axis(&mut self, value: f64) {
        self.right_axis = clamp_axis(value);
    }

    pub fn up_axis(&self) -> f64 {
        self.up_axis
    }

    pub fn right_axis(&self) -> f64 {
        self.right_axis
    }
}

fn clamp_axis(value: f64) -> f64 {
    // NaN input means no input
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Last diagnostic string produced by the flight update.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct GliderDebugText(pub String);
