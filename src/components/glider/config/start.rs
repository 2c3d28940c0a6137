use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{MAX_VELOCITY, MIN_VELOCITY};

/// Where and how a glider begins its flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GliderStartConfig {
    /// Initial position, NED (cm)
    pub position: Vector3<f64>,
    /// Initial heading (degrees, clockwise from north)
    pub heading: f64,
    /// Initial normalised airspeed
    pub velocity: f64,
}

impl Default for GliderStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -100_000.0), // 1 km up
            heading: 0.0,
            velocity: 0.5,
        }
    }
}

impl GliderStartConfig {
    pub fn is_valid(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.heading.is_finite()
            && (MIN_VELOCITY..=MAX_VELOCITY).contains(&self.velocity)
    }
}
