use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::glider::{GliderHost, GliderStartConfig};
use crate::utils::deg_to_rad;

/// Pose of a glider in the simulation frame
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GliderPose {
    /// Position in world space, NED
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for GliderPose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl GliderPose {
    /// Create a new pose at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn from_start(start: &GliderStartConfig) -> Self {
        let mut pose = Self::at_position(start.position);
        pose.set_world_rotation(0.0, start.heading, 0.0);
        pose
    }

    /// Height above the NED origin
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }
}

impl GliderHost for GliderPose {
    fn set_world_rotation(&mut self, pitch: f64, yaw: f64, roll: f64) {
        self.attitude =
            UnitQuaternion::from_euler_angles(deg_to_rad(roll), deg_to_rad(pitch), deg_to_rad(yaw));
    }

    fn add_local_offset(&mut self, offset: Vector3<f64>) {
        self.position += self.attitude * offset;
    }

    fn add_world_offset(&mut self, offset: Vector3<f64>) {
        self.position += offset;
    }
}
